use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Store-assigned identifier of a blog record.
///
/// Absent on drafts; present and unique on every record returned by a read or list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlogId(String);

impl_id!(BlogId);
