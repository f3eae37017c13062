use heapless::String as HeaplessString;
use lead_tracker_db::models::user::user_account::UserAccountModel;
use std::str::FromStr;
use uuid::Uuid;

pub fn create_test_user(display_name: &str) -> UserAccountModel {
    let id = Uuid::new_v4();
    UserAccountModel {
        id,
        email: HeaplessString::from_str(&format!("{}@example.com", id.simple())).unwrap(),
        display_name: HeaplessString::from_str(display_name).unwrap(),
        can_delete: false,
    }
}
