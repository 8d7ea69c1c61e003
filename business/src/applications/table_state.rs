//! Interaction state of the applications table.
//!
//! Filter, sort, page, and modal selection live here so the UI layer stays a
//! pure render of this state plus the record list. Column visibility is NOT
//! stored: the visible set is re-derived from role and viewport width every
//! frame, so filter, sort, and selection survive resizes unchanged.

use crate::application::Application;
use crate::column_policy::{ColumnKey, ColumnSpec, cell_text};
use insider_states::{SnapshotClone, State, state_assign_impl};
use std::any::Any;
use std::cmp::Ordering;
use std::ops::Range;

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: ColumnKey,
    pub direction: SortDirection,
}

/// Which modal is open over the table, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableModal {
    #[default]
    None,
    View,
    Edit,
}

#[derive(Debug, Clone, Default)]
pub struct ApplicationsTableState {
    pub filter: String,
    pub sort: Option<SortState>,
    pub page: usize,
    pub selected: Option<Application>,
    pub open_modal: TableModal,
    /// Working copy edited in the edit modal; the original record stays
    /// untouched until the caller applies the draft.
    pub edit_draft: Option<Application>,
}

impl ApplicationsTableState {
    /// Clicking a header toggles direction on the same column and starts
    /// ascending on a new one.
    pub fn toggle_sort(&mut self, key: ColumnKey) {
        self.sort = Some(match self.sort {
            Some(SortState {
                key: current,
                direction: SortDirection::Ascending,
            }) if current == key => SortState {
                key,
                direction: SortDirection::Descending,
            },
            _ => SortState {
                key,
                direction: SortDirection::Ascending,
            },
        });
    }

    pub fn open_view(&mut self, record: Application) {
        self.selected = Some(record);
        self.open_modal = TableModal::View;
        self.edit_draft = None;
    }

    pub fn open_edit(&mut self, record: Application) {
        self.edit_draft = Some(record.clone());
        self.selected = Some(record);
        self.open_modal = TableModal::Edit;
    }

    pub fn close_modal(&mut self) {
        self.open_modal = TableModal::None;
        self.selected = None;
        self.edit_draft = None;
    }

    /// Indices of records passing the filter, in sorted order.
    ///
    /// The filter matches case-insensitively against the text of the columns
    /// currently visible. Sorting is stable, so equal rows keep their
    /// incoming order.
    pub fn visible_rows(&self, records: &[Application], columns: &[ColumnSpec]) -> Vec<usize> {
        let needle = self.filter.trim().to_lowercase();
        let mut rows: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                if needle.is_empty() {
                    return true;
                }
                columns.iter().any(|column| {
                    cell_text(record, column.key)
                        .is_some_and(|text| text.to_lowercase().contains(&needle))
                })
            })
            .map(|(index, _)| index)
            .collect();

        if let Some(sort) = self.sort {
            rows.sort_by(|&a, &b| {
                let ordering = compare_cells(&records[a], &records[b], sort.key);
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        rows
    }

    pub fn page_count(row_count: usize) -> usize {
        row_count.div_ceil(PAGE_SIZE).max(1)
    }

    /// Keeps the current page valid after the row count changes.
    pub fn clamp_page(&mut self, row_count: usize) {
        let last = Self::page_count(row_count) - 1;
        if self.page > last {
            self.page = last;
        }
    }

    /// The slice of `visible_rows` output shown on the current page.
    pub fn page_range(&self, row_count: usize) -> Range<usize> {
        let start = (self.page * PAGE_SIZE).min(row_count);
        let end = (start + PAGE_SIZE).min(row_count);
        start..end
    }

    pub fn can_previous(&self) -> bool {
        self.page > 0
    }

    pub fn can_next(&self, row_count: usize) -> bool {
        self.page + 1 < Self::page_count(row_count)
    }
}

fn compare_cells(a: &Application, b: &Application, key: ColumnKey) -> Ordering {
    match key {
        ColumnKey::CreatedAt => a.created_at.cmp(&b.created_at),
        ColumnKey::Actions => Ordering::Equal,
        _ => {
            let left = cell_text(a, key).unwrap_or_default().to_lowercase();
            let right = cell_text(b, key).unwrap_or_default().to_lowercase();
            left.cmp(&right)
        }
    }
}

impl SnapshotClone for ApplicationsTableState {}

impl State for ApplicationsTableState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
