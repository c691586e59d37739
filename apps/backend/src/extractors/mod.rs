pub mod profile_id;
pub mod session_id;
pub mod validated_json;
pub mod validated_query;

pub use profile_id::ProfileId;
pub use session_id::SessionId;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
