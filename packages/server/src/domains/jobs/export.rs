//! Spreadsheet rendering of job listings.

use rust_xlsxwriter::{ColNum, Format, Workbook, XlsxError};

use super::models::JobListing;

/// Download name of the exported workbook.
pub const EXPORT_FILE_NAME: &str = "jobs.xlsx";

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const SHEET_NAME: &str = "Jobs";

/// Header and width of every exported column, in order.
const COLUMNS: [(&str, f64); 7] = [
    ("Title", 30.0),
    ("Company Name", 30.0),
    ("Work Type", 15.0),
    ("Locations", 30.0),
    ("Salary", 30.0),
    ("Bullet Points", 50.0),
    ("Listing Date", 15.0),
];

/// Cell values of one listing, in [`COLUMNS`] order.
pub fn export_row(job: &JobListing) -> [String; 7] {
    [
        job.title.clone(),
        job.company_name.clone(),
        job.work_type.clone(),
        job.locations.clone(),
        job.salary.clone(),
        job.bullet_points.join(", "),
        job.listing_date.format("%Y-%m-%d").to_string(),
    ]
}

/// Render listings into an XLSX workbook with a single `Jobs` sheet.
pub fn render_workbook(jobs: &[JobListing]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, (title, width)) in COLUMNS.iter().enumerate() {
        let col = col as ColNum;
        worksheet.set_column_width(col, *width)?;
        worksheet.write_string_with_format(0, col, *title, &header)?;
    }

    for (index, job) in jobs.iter().enumerate() {
        let row = (index + 1) as u32;
        for (col, value) in export_row(job).iter().enumerate() {
            worksheet.write_string(row, col as ColNum, value)?;
        }
    }

    workbook.save_to_buffer()
}
