//! Workbook fixtures written with rust_xlsxwriter

#![allow(dead_code)] // Each test binary uses a different subset

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet};
use std::path::Path;

/// A cell to write into a fixture sheet
#[derive(Debug, Clone, Copy)]
pub enum V {
    Text(&'static str),
    Num(f64),
    /// `yyyy-mm-dd hh:mm:ss`, written with a date number format
    Date(&'static str),
    /// `hh:mm:ss` with no date, written with an `hh:mm` number format
    Time(&'static str),
    Blank,
}

pub fn worksheet(name: &str, rows: &[Vec<V>]) -> Worksheet {
    let mut sheet = Worksheet::new();
    sheet.set_name(name).unwrap();
    let date_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
    let time_format = Format::new().set_num_format("hh:mm");

    for (r, row) in rows.iter().enumerate() {
        let r = r as u32;
        for (c, value) in row.iter().enumerate() {
            let c = c as u16;
            match value {
                V::Text(s) => {
                    sheet.write_string(r, c, *s).unwrap();
                }
                V::Num(n) => {
                    sheet.write_number(r, c, *n).unwrap();
                }
                V::Date(s) => {
                    let dt = ExcelDateTime::parse_from_str(s).unwrap();
                    sheet.write_datetime_with_format(r, c, &dt, &date_format).unwrap();
                }
                V::Time(s) => {
                    let time = ExcelDateTime::parse_from_str(s).unwrap();
                    sheet.write_datetime_with_format(r, c, &time, &time_format).unwrap();
                }
                V::Blank => {}
            }
        }
    }
    sheet
}

pub fn save(path: &Path, sheets: Vec<Worksheet>) {
    let mut workbook = Workbook::new();
    for sheet in sheets {
        workbook.push_worksheet(sheet);
    }
    workbook.save(path).unwrap();
}

/// Place Time, Section, Part_H, Part_I into columns A, D, H, I
pub fn class_row(time: V, section: V, part_h: V, part_i: V) -> Vec<V> {
    let mut row = vec![V::Blank; 9];
    row[0] = time;
    row[3] = section;
    row[7] = part_h;
    row[8] = part_i;
    row
}
