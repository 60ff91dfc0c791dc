//! Column catalog for the accounts table.

use egui_extras::Column;

/// Identity of each column.
///
/// Cell content is resolved by matching on this key when the row is built,
/// not by comparing key strings inside a generic content callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKey {
    Order,
    Username,
    IdCode,
    Name,
    BirthDate,
    Role,
    Reset,
    Active,
}

/// One column: identity, header title, fixed width.
pub struct ColumnSpec {
    pub key: ColumnKey,
    pub title: &'static str,
    pub width: f32,
}

/// The fixed column set with its display titles and widths.
/// The two action columns have no header title.
pub const COLUMNS: [ColumnSpec; 8] = [
    ColumnSpec {
        key: ColumnKey::Order,
        title: "STT",
        width: 50.0,
    },
    ColumnSpec {
        key: ColumnKey::Username,
        title: "TÊN ĐĂNG NHẬP",
        width: 200.0,
    },
    ColumnSpec {
        key: ColumnKey::IdCode,
        title: "CMND",
        width: 200.0,
    },
    ColumnSpec {
        key: ColumnKey::Name,
        title: "TÊN NHÂN VIÊN",
        width: 250.0,
    },
    ColumnSpec {
        key: ColumnKey::BirthDate,
        title: "NGÀY SINH",
        width: 200.0,
    },
    ColumnSpec {
        key: ColumnKey::Role,
        title: "QUYỀN",
        width: 100.0,
    },
    ColumnSpec {
        key: ColumnKey::Reset,
        title: "",
        width: 50.0,
    },
    ColumnSpec {
        key: ColumnKey::Active,
        title: "",
        width: 90.0,
    },
];

pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;
/// Max table height before the body scrolls.
pub const MAX_TABLE_HEIGHT: f32 = 500.0;

/// Column layout handed to the table engine, one entry per [`COLUMNS`] spec.
#[inline]
pub fn table_columns() -> Vec<Column> {
    COLUMNS.iter().map(|spec| Column::exact(spec.width)).collect()
}
