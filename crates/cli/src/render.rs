//! Plain-text table rendering for console output.

use movie_rentals_db::models::movie::Movie;

const MOVIE_HEADERS: [&str; 5] = ["id", "title", "year", "genre", "director"];

/// Render rows under a header line, columns padded to their widest cell.
///
/// An empty row set renders the header followed by `(no rows)`.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(headers.iter().copied(), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    if rows.is_empty() {
        lines.push("(no rows)".to_string());
    }
    for row in rows {
        lines.push(format_line(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    line.trim_end().to_string()
}

/// Render movies as a table with one row per movie.
pub fn movies_table(movies: &[Movie]) -> String {
    let rows: Vec<Vec<String>> = movies
        .iter()
        .map(|m| {
            vec![
                m.id.to_string(),
                m.title.clone(),
                m.year.to_string(),
                m.genre.clone(),
                m.director.clone(),
            ]
        })
        .collect();
    render_table(&MOVIE_HEADERS, &rows)
}
