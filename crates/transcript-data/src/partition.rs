//! Two-way split of a message table by sender identity.
//!
//! Membership is substring containment on the sender field, so a reference
//! of "Jon Smith" also claims rows sent by "Jon Smithson". Rows without a
//! sender fall into the other partition, unless the reference itself is the
//! absent sender, in which case they are the primary partition.

use tracing::debug;
use transcript_core::error::{Result, TranscriptError};
use transcript_core::models::{MessageTable, PartitionedTables};

/// Split `table` using the sender of its first row as the reference identity.
///
/// Fails with [`TranscriptError::EmptyTable`] when there is no first row. A
/// first row without a sender makes the sender-less rows the primary side.
pub fn partition(table: &MessageTable) -> Result<PartitionedTables> {
    let first = table.first().ok_or(TranscriptError::EmptyTable)?;
    Ok(partition_on(table, first.sender.as_deref()))
}

/// Split `table` on an explicit reference identity.
pub fn partition_by(table: &MessageTable, reference: &str) -> PartitionedTables {
    partition_on(table, Some(reference))
}

fn partition_on(table: &MessageTable, reference: Option<&str>) -> PartitionedTables {
    let (primary, other): (Vec<_>, Vec<_>) = table
        .iter()
        .cloned()
        .partition(|row| row.matches_reference(reference));

    debug!(
        "Partitioned on {:?}: {} primary, {} other",
        reference,
        primary.len(),
        other.len()
    );

    PartitionedTables {
        reference: reference.map(str::to_string),
        primary: MessageTable::new(primary),
        other: MessageTable::new(other),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::assemble;

    fn conversation() -> MessageTable {
        assemble(&[
            "25/10/2019 John Smith: hello\n",
            "25/10/2019 Jane Doe: hi there\n",
            "some random spotify share text\n",
            "26/10/2019 John Smith: how are you\n",
            "26/10/2019 Jane Doe: good\n",
        ])
    }

    #[test]
    fn test_partition_by_first_sender() {
        let parts = partition(&conversation()).unwrap();
        assert_eq!(parts.reference.as_deref(), Some("John Smith"));
        assert_eq!(
            parts.primary.bodies().collect::<Vec<_>>(),
            vec!["hello", "how are you"]
        );
        assert_eq!(
            parts.other.bodies().collect::<Vec<_>>(),
            vec!["hi there", "some random spotify share text\n", "good"]
        );
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let table = conversation();
        let parts = partition(&table).unwrap();

        assert_eq!(parts.primary.len() + parts.other.len(), table.len());
        assert!(parts.primary.iter().all(|r| r.sender_contains("John Smith")));
        assert!(parts.other.iter().all(|r| !r.sender_contains("John Smith")));
    }

    #[test]
    fn test_partition_absent_sender_goes_to_other() {
        let parts = partition(&conversation()).unwrap();
        assert!(parts.other.iter().any(|r| r.sender.is_none()));
        assert!(parts.primary.iter().all(|r| r.sender.is_some()));
    }

    #[test]
    fn test_partition_matches_superstring_sender() {
        let table = assemble(&[
            "01/01/2020 Jon Smith: hi\n",
            "01/01/2020 Jon Smithson: hello\n",
            "01/01/2020 Jane Doe: hey\n",
        ]);
        let parts = partition(&table).unwrap();
        assert_eq!(parts.primary.len(), 2);
        assert_eq!(parts.other.len(), 1);
    }

    #[test]
    fn test_partition_empty_table_is_error() {
        let err = partition(&MessageTable::default()).unwrap_err();
        assert!(matches!(err, TranscriptError::EmptyTable));
    }

    #[test]
    fn test_partition_first_row_without_sender_groups_senderless_rows() {
        let table = assemble(&[
            "25/10/2019, 21:00 - Messages and calls are end-to-end encrypted.\n",
            "25/10/2019, 21:04 - John Smith: hello\n",
            "a continuation line\n",
            "25/10/2019, 21:05 - Jane Doe: hi\n",
        ]);
        let parts = partition(&table).unwrap();

        assert!(parts.reference.is_none());
        assert_eq!(parts.primary.len(), 2);
        assert!(parts.primary.iter().all(|r| r.sender.is_none()));
        assert_eq!(
            parts.other.senders().collect::<Vec<_>>(),
            vec![Some("John Smith"), Some("Jane Doe")]
        );
    }

    #[test]
    fn test_partition_by_explicit_reference() {
        let parts = partition_by(&conversation(), "Jane Doe");
        assert_eq!(parts.reference.as_deref(), Some("Jane Doe"));
        assert_eq!(parts.primary.len(), 2);
        assert_eq!(parts.other.len(), 3);
    }
}
