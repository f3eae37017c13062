pub mod create;
pub mod delete_by_id;
pub mod find_by_id;
pub mod load_all;
pub mod subscribe;
pub mod update_by_id;

// Re-exports
pub use create::*;
pub use delete_by_id::*;
pub use find_by_id::*;
pub use load_all::*;
pub use subscribe::*;
pub use update_by_id::*;

use crate::models::client::client_record::{ClientRecordModel, ClientUpdate};
use crate::models::user::user_account::{UserAccountModel, UserUpdate};

/// Everything the services need from the `clients` collection.
pub trait ClientRepository:
    Create<ClientRecordModel>
    + LoadAll<ClientRecordModel>
    + FindById<ClientRecordModel>
    + UpdateById<ClientRecordModel, ClientUpdate>
    + DeleteById<ClientRecordModel>
    + Subscribe<ClientRecordModel>
{
}

impl<R> ClientRepository for R where
    R: Create<ClientRecordModel>
        + LoadAll<ClientRecordModel>
        + FindById<ClientRecordModel>
        + UpdateById<ClientRecordModel, ClientUpdate>
        + DeleteById<ClientRecordModel>
        + Subscribe<ClientRecordModel>
{
}

/// Everything the services need from the `users` collection.
pub trait UserRepository:
    Create<UserAccountModel>
    + LoadAll<UserAccountModel>
    + FindById<UserAccountModel>
    + UpdateById<UserAccountModel, UserUpdate>
    + DeleteById<UserAccountModel>
    + Subscribe<UserAccountModel>
{
}

impl<R> UserRepository for R where
    R: Create<UserAccountModel>
        + LoadAll<UserAccountModel>
        + FindById<UserAccountModel>
        + UpdateById<UserAccountModel, UserUpdate>
        + DeleteById<UserAccountModel>
        + Subscribe<UserAccountModel>
{
}
