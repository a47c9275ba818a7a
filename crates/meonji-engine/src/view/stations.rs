use crate::chunk::Chunk;
use crate::palette::cyan;
use crate::text::{Side, pad};
use meonji_types::District;

fn column<F>(districts: &[District], prefix: &str, field: F) -> Chunk
where
    F: Fn(&District) -> &'static str,
{
    Chunk::left(districts.iter().map(|d| format!("{}{}", prefix, field(d))))
}

/// Example requests for one district, one per identifier style, with the
/// trailing comments lined up.
fn examples(district: &District, url: &str) -> String {
    let ids = [district.short, district.long, district.code];
    let width = ids.iter().map(|id| id.chars().count()).max().unwrap_or(0) + 3;

    ids.iter()
        .map(|id| {
            let id_cell = pad(&cyan(id), ' ', width - id.chars().count(), Side::End);
            format!("    $ curl {}/{}# {} 공기 상태\n", url, id_cell, district.name)
        })
        .collect()
}

/// Table of every district's identifiers followed by usage examples for
/// the first one.
pub fn render_station_list(districts: &[District], url: &str) -> String {
    let table = Chunk::merge_all([
        column(districts, "    ", |d| d.short),
        column(districts, "  ", |d| d.long),
        column(districts, "  ", |d| d.code),
        column(districts, "   # ", |d| d.name),
    ]);

    let mut view = format!(" 자치구 표기법:\n\n{}\n", table);
    if let Some(first) = districts.first() {
        view.push_str(" 예시:\n\n");
        view.push_str(&examples(first, url));
    }
    view
}
