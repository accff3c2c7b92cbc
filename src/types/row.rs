use std::fmt;

use crate::types::{
    EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE, ROW_SIZE, USERNAME_OFFSET, USERNAME_SIZE,
};

/// One logical record. A `Row` is only ever built from fields that already
/// satisfy the length and sign constraints; validation happens in the
/// statement parser, never here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl Row {
    pub fn new(id: i32, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Encode this row into a fixed-width slot: the id in little-endian
    /// binary form, then username and email left-justified in their fields
    /// with the remainder zero-filled. Total over valid rows.
    pub fn serialize_into(&self, slot: &mut [u8]) {
        debug_assert_eq!(slot.len(), ROW_SIZE);

        slot[ID_OFFSET..ID_OFFSET + ID_SIZE].copy_from_slice(&self.id.to_le_bytes());
        write_text_field(
            &mut slot[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE],
            &self.username,
        );
        write_text_field(&mut slot[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE], &self.email);
    }

    /// Decode a fixed-width slot back into a row. Text fields are read up to
    /// their first zero byte, or the full field width when unterminated.
    pub fn from_bytes(slot: &[u8]) -> Self {
        debug_assert_eq!(slot.len(), ROW_SIZE);

        let mut id_bytes = [0u8; ID_SIZE];
        id_bytes.copy_from_slice(&slot[ID_OFFSET..ID_OFFSET + ID_SIZE]);

        Self {
            id: i32::from_le_bytes(id_bytes),
            username: read_text_field(&slot[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE]),
            email: read_text_field(&slot[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE]),
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{id:{}, email:{}, user:{}}}", self.id, self.email, self.username)
    }
}

fn write_text_field(field: &mut [u8], text: &str) {
    let bytes = text.as_bytes();
    debug_assert!(bytes.len() <= field.len());

    field[..bytes.len()].copy_from_slice(bytes);
    field[bytes.len()..].fill(0);
}

fn read_text_field(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}
