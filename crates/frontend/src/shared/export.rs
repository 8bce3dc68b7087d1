/// CSV export shared by the analysis tables
use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const CSV_DELIMITER: &str = ",";

/// Trait для типов, которые могут быть экспортированы в CSV
pub trait CsvExportable {
    /// Column headers, in output order
    fn headers() -> Vec<&'static str>;

    /// Cells of one row, same order as [`CsvExportable::headers`]
    fn to_csv_row(&self) -> Vec<String>;
}

/// Builds the whole document: BOM, header line, one line per item.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv_content = String::new();

    // UTF-8 BOM so Excel picks the right encoding for Japanese text
    csv_content.push('\u{FEFF}');

    csv_content.push_str(&T::headers().join(CSV_DELIMITER));
    csv_content.push('\n');

    for item in data {
        let escaped_row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&escaped_row.join(CSV_DELIMITER));
        csv_content.push('\n');
    }

    csv_content
}

/// Экспортирует список данных в CSV файл и инициирует скачивание
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("エクスポートするデータがありません".to_string());
    }

    let blob = create_csv_blob(&build_csv(data))?;
    download_blob(&blob, filename)?;

    log::info!("CSV exported: {} ({} rows)", filename, data.len());
    Ok(())
}

/// `{prefix}_{subject}_{YYYY-MM-DD}.csv`, with characters illegal in file names replaced.
pub fn csv_filename(prefix: &str, subject: &str, date: NaiveDate) -> String {
    let safe: String = subject
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .collect();
    format!("{}_{}_{}.csv", prefix, safe, date.format("%Y-%m-%d"))
}

/// Экранирует CSV ячейку если необходимо
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(CSV_DELIMITER) || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
    {
        // Удваиваем кавычки внутри значения
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(&'static str, u32);

    impl CsvExportable for Pair {
        fn headers() -> Vec<&'static str> {
            vec!["名前", "数"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_build_csv_layout() {
        let csv = build_csv(&[Pair("a", 1), Pair("b, c", 2)]);
        assert!(csv.starts_with('\u{FEFF}'));
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines, vec!["名前,数", "a,1", "\"b, c\",2"]);
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
        assert_eq!(escape_csv_cell("semi;colon"), "semi;colon");
    }

    #[test]
    fn test_csv_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(
            csv_filename("keyword_analysis", "ゲーミング眼鏡", date),
            "keyword_analysis_ゲーミング眼鏡_2025-01-09.csv"
        );
        assert_eq!(
            csv_filename("keyword_analysis", "a/b", date),
            "keyword_analysis_a_b_2025-01-09.csv"
        );
    }
}
