//! Table columns of the appointment list.

use appt_core::appointment::AppointmentRow;
use appt_core::dates;
use chrono::{Local, TimeZone};
use std::fmt::Display;

/// Row field a column reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnField {
    Date,
    ClientName,
    Status,
    HolderName,
    Compliences,
    Diagnosis,
}

impl ColumnField {
    /// The row key, as the table widget addresses it.
    pub fn key(self) -> &'static str {
        match self {
            ColumnField::Date => "date",
            ColumnField::ClientName => "clientName",
            ColumnField::Status => "status",
            ColumnField::HolderName => "holderName",
            ColumnField::Compliences => "compliences",
            ColumnField::Diagnosis => "diagnosis",
        }
    }

    fn raw(self, row: &AppointmentRow) -> String {
        match self {
            ColumnField::Date => row.date.to_string(),
            ColumnField::ClientName => row.client_name.clone(),
            ColumnField::Status => row.status.clone(),
            ColumnField::HolderName => row.holder_name.clone(),
            ColumnField::Compliences => row.compliences.clone(),
            ColumnField::Diagnosis => row.diagnosis.clone(),
        }
    }
}

/// Cell formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    /// `DD.MM.YYYY HH.mm`
    DateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    pub width: &'static str,
}

/// A table column descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub data_field: ColumnField,
    pub text: &'static str,
    pub header_style: Option<HeaderStyle>,
    pub formatter: Option<CellFormat>,
}

impl Column {
    const fn new(data_field: ColumnField, text: &'static str, width: Option<&'static str>) -> Self {
        let header_style = match width {
            Some(width) => Some(HeaderStyle { width }),
            None => None,
        };
        Self {
            data_field,
            text,
            header_style,
            formatter: None,
        }
    }

    const fn formatted(mut self, format: CellFormat) -> Self {
        self.formatter = Some(format);
        self
    }

    /// Cell text for `row`, with instants shown in the user's zone.
    pub fn cell(&self, row: &AppointmentRow) -> String {
        self.cell_in(row, &Local)
    }

    /// Cell text for `row`, with instants shown in `tz`.
    pub fn cell_in<Tz>(&self, row: &AppointmentRow, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match (self.formatter, self.data_field) {
            (Some(CellFormat::DateTime), ColumnField::Date) => dates::format_instant(row.date, tz),
            (_, field) => field.raw(row),
        }
    }

    /// Inline CSS for the header cell.
    pub fn header_css(&self) -> String {
        self.header_style
            .map(|s| format!("width: {};", s.width))
            .unwrap_or_default()
    }
}

const APPOINTMENT_COLUMNS: [Column; 6] = [
    Column::new(ColumnField::Date, "Дата", Some("150px")).formatted(CellFormat::DateTime),
    Column::new(ColumnField::ClientName, "Клиент", Some("300px")),
    Column::new(ColumnField::Status, "Статус", None),
    Column::new(ColumnField::HolderName, "Принимающий", Some("300px")),
    Column::new(ColumnField::Compliences, "Жалобы", Some("200px")),
    Column::new(ColumnField::Diagnosis, "Диагноз", Some("200px")),
];

/// The appointment list columns, in display order.
pub fn appointment_columns() -> Vec<Column> {
    APPOINTMENT_COLUMNS.to_vec()
}
