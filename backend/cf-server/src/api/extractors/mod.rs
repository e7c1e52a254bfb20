pub mod bearer;
pub mod validated_json;
