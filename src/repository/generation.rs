use uuid::Uuid;

use crate::client::memory::Tables;

use super::{
    db::Repository,
    models::{Generation, GenerationType},
};

pub struct CreateGenerationArgs {
    pub user_id: i64,
    pub kind: GenerationType,
    pub prompt: String,
    pub image_url: String,
}

impl Repository {
    /// Prepends, so the log stays newest first.
    pub fn create_generation(&self, db: &mut Tables, args: CreateGenerationArgs) -> Generation {
        let generation = Generation {
            id: Uuid::new_v4(),
            user_id: args.user_id,
            kind: args.kind,
            prompt: args.prompt,
            image_url: args.image_url,
            created_at: chrono::Utc::now(),
        };
        db.generations.insert(0, generation.clone());
        generation
    }

    pub fn get_generations_by_user_id(&self, db: &Tables, user_id: i64) -> Vec<Generation> {
        db.generations
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect()
    }
}
