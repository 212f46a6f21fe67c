use crate::cli::parser::PhotoAction;
use crate::config::Config;
use crate::core::photo::PhotoLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::store::blob::BlobStore;
use crate::store::mirror::Mirror;

/// CLI photo indexes are 1-based; the core works 0-based.
fn to_zero_based(index: usize) -> AppResult<usize> {
    index
        .checked_sub(1)
        .ok_or(AppError::InvalidPhotoIndex(index))
}

pub fn handle(action: &PhotoAction, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let mut mirror = Mirror::load(&cfg.mirror);
    let blobs = BlobStore::new(&cfg.photo_dir);

    match action {
        PhotoAction::Attach { id, files } => {
            PhotoLogic::attach(&mut pool, cfg, &mut mirror, &blobs, id, files)
        }
        PhotoAction::Detach { id, index } => {
            let index = to_zero_based(*index)?;
            PhotoLogic::detach(&mut pool, cfg, &mut mirror, &blobs, id, index)
        }
        PhotoAction::List { id } => PhotoLogic::list(&mut pool, id),
        PhotoAction::View { id, index } => {
            let index = to_zero_based(*index)?;
            PhotoLogic::view(&mut pool, cfg, &mut mirror, id, index)
        }
        PhotoAction::Prev => PhotoLogic::step(&mut pool, cfg, &mut mirror, -1),
        PhotoAction::Next => PhotoLogic::step(&mut pool, cfg, &mut mirror, 1),
    }
}
