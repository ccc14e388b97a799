#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use calorielog::store::workbook::{Cell, Sheet, Workbook};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a private directory so the
/// user's real configuration is never read or written.
pub fn cl() -> Command {
    let mut home = env::temp_dir();
    home.push("calorielog_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("calorielog");
    cmd.env("HOME", &home).env_remove("RUST_LOG");
    cmd
}

/// Unique workbook path inside the system temp dir; any previous file is removed.
pub fn temp_workbook(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_calorielog.xlsx", name));
    fs::remove_file(&path).ok();
    path
}

/// Temporary output file path (removed if present).
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

pub fn text(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

pub fn num(n: f64) -> Cell {
    Cell::Number(n)
}

/// Build a sheet from rows of cells.
pub fn sheet(name: &str, rows: Vec<Vec<Cell>>) -> Sheet {
    let mut s = Sheet::new(name);
    for (r, row) in rows.into_iter().enumerate() {
        for (c, cell) in row.into_iter().enumerate() {
            s.set(r, c, cell);
        }
    }
    s
}

/// Apple / Banana catalog on sheet 0, log sheet with a header on sheet 1.
pub fn fruit_workbook(name: &str) -> PathBuf {
    let path = temp_workbook(name);
    let wb = Workbook {
        sheets: vec![
            sheet(
                "Catalog",
                vec![
                    vec![text("Apple"), text("1 medium"), num(95.0)],
                    vec![text("Banana"), text("1 medium"), num(105.0)],
                ],
            ),
            sheet("Log", vec![vec![text("Date"), text("Calories")]]),
        ],
    };
    wb.save(&path).expect("write fruit workbook");
    path
}

/// Write a workbook made of the given sheets.
pub fn write_workbook(name: &str, sheets: Vec<Sheet>) -> PathBuf {
    let path = temp_workbook(name);
    Workbook { sheets }.save(&path).expect("write workbook");
    path
}

/// Read back one sheet of a workbook.
pub fn read_sheet(path: &PathBuf, index: usize) -> Sheet {
    Workbook::open(path)
        .expect("open workbook")
        .sheet(index)
        .expect("sheet exists")
        .clone()
}
