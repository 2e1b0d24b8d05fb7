use crate::common::*;

#[doc = "Current local date formatted for the dashboard filename, e.g. `03_15_2024`."]
pub fn current_date_file_stamp() -> String {
    Local::now().format("%m_%d_%Y").to_string()
}

#[doc = r#"
    Date-stamped name of the standalone dashboard document:
    `<base_filename>_<MM_DD_YYYY>.html`.

    Two uploads on the same calendar date resolve to the same name, so the
    later one overwrites the earlier; acceptable for a single-user tool.
"#]
pub fn dashboard_file_name(base_filename: &str) -> String {
    format!("{}_{}.html", base_filename, current_date_file_stamp())
}
