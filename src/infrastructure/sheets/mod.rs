pub mod csv_workbook;
