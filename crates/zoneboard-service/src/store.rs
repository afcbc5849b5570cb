//! The timezone record store.
//!
//! Owns the ordered collection of records and enforces the validation and
//! uniqueness invariants: labels are unique (case-sensitive), every stored
//! record passed full validation at insertion, and exactly one record is the
//! protected local record created at initialization.

use std::sync::Arc;

use chrono_tz::Tz;
use serde::Serialize;

use zoneboard_core::types::TimeFormat;

use crate::clock::{Clock, format_local_time, minutes_since_midnight};
use crate::error::{ServiceError, StoreError, StoreResult};
use crate::tz::TzCatalog;

/// A stored record: a display label bound to a resolved timezone.
///
/// Records are never mutated in place; changing a label or timezone is
/// modeled as delete-then-add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneRecord {
    pub label: String,
    /// Canonical IANA identifier of the resolved timezone.
    pub timezone_id: String,
    pub tz: Tz,
    /// True only for the automatically created record for the viewer's own
    /// timezone.
    pub is_local: bool,
}

/// A listing snapshot of one record, with its time computed at listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordRow {
    pub label: String,
    pub timezone_id: String,
    /// Derived at every listing, never stored.
    pub current_time: String,
    pub is_local: bool,
}

/// Ordered collection of timezone records.
///
/// Constructed once per session via [`TimezoneStore::initialize`] and owned
/// explicitly by the caller; there is no ambient global instance.
pub struct TimezoneStore {
    /// Records in insertion order. The local record is always present.
    records: Vec<TimezoneRecord>,
    catalog: TzCatalog,
    clock: Arc<dyn Clock>,
    time_format: TimeFormat,
}

impl TimezoneStore {
    /// ## Summary
    /// Creates the store containing exactly the local record, resolved from
    /// `local_timezone_id` (a detected or configured identifier).
    ///
    /// Runs once per session: the store is constructed by value, so there is
    /// no re-initialization path that could create a second local record.
    ///
    /// ## Errors
    /// Returns `ServiceError::InvalidConfiguration` if the local timezone
    /// identifier does not resolve.
    pub fn initialize(
        mut catalog: TzCatalog,
        clock: Arc<dyn Clock>,
        time_format: TimeFormat,
        local_timezone_id: &str,
        local_label: &str,
    ) -> Result<Self, ServiceError> {
        let tz = catalog.resolve(local_timezone_id).map_err(|_e| {
            ServiceError::InvalidConfiguration(format!(
                "Local timezone {local_timezone_id} is not a recognized timezone"
            ))
        })?;

        tracing::info!(timezone = tz.name(), label = local_label, "Local record created");

        Ok(Self {
            records: vec![TimezoneRecord {
                label: local_label.to_string(),
                timezone_id: tz.name().to_string(),
                tz,
                is_local: true,
            }],
            catalog,
            clock,
            time_format,
        })
    }

    /// ## Summary
    /// Validates and appends a new record.
    ///
    /// The label is trimmed before validation; the timezone may be an IANA
    /// identifier or any recognized alias and is stored canonicalized.
    /// Validation is all-or-nothing: a rejected submission leaves the store
    /// unchanged.
    ///
    /// ## Errors
    /// - `EmptyLabel` if the label is empty after trimming.
    /// - `EmptyTimezone` if the timezone identifier is empty.
    /// - `UnknownTimezone` if the identifier does not resolve.
    /// - `DuplicateLabel` if a record with the same label already exists.
    pub fn add_record(&mut self, label: &str, timezone_id: &str) -> StoreResult<&TimezoneRecord> {
        let label = label.trim();
        if label.is_empty() {
            return Err(StoreError::EmptyLabel);
        }

        if timezone_id.is_empty() {
            return Err(StoreError::EmptyTimezone);
        }

        let tz = self.catalog.resolve(timezone_id)?;

        if self.records.iter().any(|r| r.label == label) {
            return Err(StoreError::DuplicateLabel(label.to_string()));
        }

        tracing::debug!(label, timezone = tz.name(), "Record added");

        self.records.push(TimezoneRecord {
            label: label.to_string(),
            timezone_id: tz.name().to_string(),
            tz,
            is_local: false,
        });

        // Just pushed, so the collection is non-empty.
        Ok(self
            .records
            .last()
            .unwrap_or_else(|| unreachable!("record was just inserted")))
    }

    /// ## Summary
    /// Removes the record with the given label.
    ///
    /// ## Errors
    /// - `NotFound` if no record carries the label.
    /// - `ProtectedRecord` if the label identifies the local record, which
    ///   is never removable.
    pub fn delete_record(&mut self, label: &str) -> StoreResult<()> {
        let position = self
            .records
            .iter()
            .position(|r| r.label == label)
            .ok_or_else(|| StoreError::NotFound(label.to_string()))?;

        if self.records[position].is_local {
            return Err(StoreError::ProtectedRecord);
        }

        self.records.remove(position);

        tracing::debug!(label, "Record deleted");

        Ok(())
    }

    /// ## Summary
    /// Produces a snapshot of all records with freshly computed times.
    ///
    /// Every row's time is computed against a single instant captured once
    /// per call. Default ordering is insertion order; `sort_by_time` orders
    /// by ascending midnight-relative local time, wrapping once per 24h
    /// cycle, with ties broken by insertion order.
    #[must_use]
    pub fn list_records(&self, sort_by_time: bool) -> Vec<RecordRow> {
        let at = self.clock.now_utc();

        let mut rows: Vec<(u32, RecordRow)> = self
            .records
            .iter()
            .map(|r| {
                (
                    minutes_since_midnight(r.tz, at),
                    RecordRow {
                        label: r.label.clone(),
                        timezone_id: r.timezone_id.clone(),
                        current_time: format_local_time(r.tz, at, self.time_format),
                        is_local: r.is_local,
                    },
                )
            })
            .collect();

        if sort_by_time {
            // Stable, so insertion order breaks ties.
            rows.sort_by_key(|(minutes, _)| *minutes);
        }

        rows.into_iter().map(|(_, row)| row).collect()
    }

    /// The protected record representing the viewer's own timezone.
    ///
    /// ## Panics
    /// Never panics in practice: initialization guarantees the local record
    /// exists for the lifetime of the store.
    #[must_use]
    pub fn local_record(&self) -> &TimezoneRecord {
        self.records
            .iter()
            .find(|r| r.is_local)
            .unwrap_or_else(|| unreachable!("local record is created at initialization"))
    }

    /// Identifiers offered to the presentation layer's selection control.
    #[must_use]
    pub fn offered_timezones(&self) -> &[String] {
        self.catalog.offered()
    }

    /// Number of records currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Display format the store renders times in.
    #[must_use]
    pub fn time_format(&self) -> TimeFormat {
        self.time_format
    }
}
