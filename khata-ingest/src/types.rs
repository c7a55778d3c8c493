/// One raw statement row, every field still source text.
///
/// `None` means the source had no such column at all; `Some("")` means the
/// column exists but the cell is blank. The normalizer's schema check relies
/// on that distinction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub date: Option<String>,
    pub value_date: Option<String>,
    pub description: Option<String>,
    pub cheque_number: Option<String>,
    pub withdrawal: Option<String>,
    pub deposit: Option<String>,
    pub balance: Option<String>,
}
