use lead_tracker_api::domain::client_fields::NewClientFields;
use lead_tracker_db::models::client::client_record::ClientRecordModel;
use lead_tracker_db::utils::now_timestamp;

pub fn create_test_client(company: &str) -> ClientRecordModel {
    let mut fields = NewClientFields::new(company, "Jo Doe", "jo@acme.test");
    fields.industry = Some("Retail".to_string());
    fields.phone = Some("555-0100".to_string());
    ClientRecordModel::from_fields(&fields, "tester@example.com", now_timestamp()).unwrap()
}
