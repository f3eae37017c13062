pub mod create;
pub mod delete_by_id;
pub mod find_by_id;
pub mod load_all;
pub mod repo_impl;
pub mod subscribe;
pub mod update_by_id;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::UserRepositoryImpl;
