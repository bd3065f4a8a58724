use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{spotify, types::Token};

pub async fn auth(shared_state: Arc<Mutex<Option<Token>>>) {
    spotify::auth::auth(shared_state).await;
}
