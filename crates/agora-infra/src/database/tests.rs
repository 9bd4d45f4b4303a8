#[cfg(test)]
mod tests {
    use crate::database::entity::post::{self, CommentList, LikeList};
    use crate::database::entity::profile;
    use crate::database::postgres_repo::{PostgresPostRepository, PostgresProfileRepository};
    use agora_core::DomainError;
    use agora_core::domain::{Like, Post};
    use agora_core::ports::{BaseRepository, PostRepository, ProfileRepository};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn post_model(id: uuid::Uuid, likes: Vec<Like>) -> post::Model {
        post::Model {
            id,
            user_id: uuid::Uuid::new_v4(),
            text: "Test Post".to_owned(),
            name: "Alice".to_owned(),
            avatar: "a.png".to_owned(),
            likes: LikeList(likes),
            comments: CommentList::default(),
            created_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = uuid::Uuid::new_v4();
        let liker = uuid::Uuid::new_v4();

        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(
                post_id,
                vec![Like { user_id: liker }],
            )]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.text, "Test Post");
        assert_eq!(post.id, post_id);
        assert_eq!(post.likes, vec![Like { user_id: liker }]);
    }

    #[tokio::test]
    async fn test_find_all_posts() {
        let (first, second) = (uuid::Uuid::new_v4(), uuid::Uuid::new_v4());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                post_model(first, vec![]),
                post_model(second, vec![]),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts = repo.find_all_by_date_desc().await.unwrap();

        let ids: Vec<uuid::Uuid> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[tokio::test]
    async fn test_save_existing_post_updates() {
        let model = post_model(uuid::Uuid::new_v4(), vec![]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let saved = repo.save(Post::from(model.clone())).await.unwrap();

        assert_eq!(saved.id, model.id);
    }

    #[tokio::test]
    async fn test_save_new_post_falls_back_to_insert() {
        let model = post_model(uuid::Uuid::new_v4(), vec![]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new(), vec![model.clone()]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let saved = repo.save(Post::from(model.clone())).await.unwrap();

        assert_eq!(saved, Post::from(model));
    }

    #[tokio::test]
    async fn test_update_with_locks_and_writes() {
        let liker = uuid::Uuid::new_v4();
        let model = post_model(uuid::Uuid::new_v4(), vec![]);
        let liked = post::Model {
            likes: LikeList(vec![Like { user_id: liker }]),
            ..model.clone()
        };
        // SELECT ... FOR UPDATE, then UPDATE ... RETURNING
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()], vec![liked]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let saved = repo
            .update_with(model.id, Box::new(move |p: Post| p.with_like(liker)))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(saved.likes, vec![Like { user_id: liker }]);
    }

    #[tokio::test]
    async fn test_update_with_missing_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo
            .update_with(uuid::Uuid::new_v4(), Box::new(Ok::<Post, DomainError>))
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_profile_by_user() {
        let user_id = uuid::Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![profile::Model {
                id: uuid::Uuid::new_v4(),
                user_id,
                handle: "alice".to_owned(),
                created_at: chrono::Utc::now().into(),
            }]])
            .into_connection();

        let repo = PostgresProfileRepository::new(db);

        let profile = repo.find_by_user_id(user_id).await.unwrap().unwrap();

        assert_eq!(profile.user_id, user_id);
        assert_eq!(profile.handle, "alice");
    }
}
