pub mod patch_apply;
pub mod patch_create;
pub mod patch_delete;
pub mod patch_rollback;
pub mod setup;
pub mod status;
