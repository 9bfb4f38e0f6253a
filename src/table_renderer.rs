use crate::stats::{Listing, format_timestamp};
use crate::types::DirEntryRecord;
use comfy_table::{Cell, CellAlignment, Table, presets};

pub const DIR_MARKER: &str = "<DIR>";

/// Timestamp and size columns only; names are appended by [`render_listing`]
/// so a name is never padded, trimmed or wrapped by the table.
#[must_use]
pub fn build_table(entries: &[DirEntryRecord]) -> Table {
    let mut table = Table::new();
    // No borders or row lines; padding alone separates the columns
    table.load_preset(presets::NOTHING);

    for entry in entries {
        let size = if entry.is_dir {
            DIR_MARKER.to_string()
        } else {
            entry.size.to_string()
        };
        table.add_row(vec![
            Cell::new(format_timestamp(&entry.modified)),
            Cell::new(size),
        ]);
    }

    // Columns only exist once a row was added
    if let Some(column) = table.column_mut(0) {
        column.set_padding((0, 1));
    }
    if let Some(column) = table.column_mut(1) {
        column.set_padding((1, 0));
        column.set_cell_alignment(CellAlignment::Right);
    }

    table
}

// Control characters (newlines included) would split one entry over several lines
fn display_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

#[must_use]
pub fn summary_lines(listing: &Listing) -> [String; 2] {
    [
        format!(
            "{} File(s) {} bytes",
            listing.file_count, listing.total_file_size
        ),
        format!("{} Dir(s)", listing.dir_count),
    ]
}

/// Table rows (blank when there are none) followed by the two summary lines.
#[must_use]
pub fn render_listing(listing: &Listing) -> String {
    let rows: Vec<String> = build_table(&listing.entries)
        .lines()
        .zip(&listing.entries)
        .map(|(line, entry)| format!("{}  {}", line.trim_end(), display_name(&entry.name)))
        .collect();

    let [files, dirs] = summary_lines(listing);
    format!("{}\n{files}\n{dirs}", rows.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn make_record(name: &str, is_dir: bool, size: u64) -> DirEntryRecord {
        DirEntryRecord {
            name: name.to_string(),
            is_dir,
            size,
            modified: Local.with_ymd_and_hms(2024, 1, 5, 9, 7, 0).unwrap(),
        }
    }

    fn listing_of(entries: Vec<DirEntryRecord>) -> Listing {
        let file_count = entries.iter().filter(|e| !e.is_dir).count();
        let dir_count = entries.len() - file_count;
        let total_file_size = entries.iter().filter(|e| !e.is_dir).map(|e| e.size).sum();
        Listing {
            entries,
            file_count,
            dir_count,
            total_file_size,
        }
    }

    #[test]
    fn test_render_empty_listing() {
        let output = render_listing(&Listing::default());
        assert_eq!(output, "\n0 File(s) 0 bytes\n0 Dir(s)");
    }

    #[test]
    fn test_render_dir_marker_and_size() {
        let listing = listing_of(vec![
            make_record("photos", true, 4096),
            make_record("notes.txt", false, 100),
        ]);

        let output = render_listing(&listing);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);

        let dir_row: Vec<&str> = lines[0].split_whitespace().collect();
        assert_eq!(dir_row, vec!["01/05/2024", "09:07", "<DIR>", "photos"]);

        let file_row: Vec<&str> = lines[1].split_whitespace().collect();
        assert_eq!(file_row, vec!["01/05/2024", "09:07", "100", "notes.txt"]);

        assert_eq!(lines[2], "1 File(s) 100 bytes");
        assert_eq!(lines[3], "1 Dir(s)");
    }

    #[test]
    fn test_render_columns_separated_by_two_spaces() {
        let listing = listing_of(vec![make_record("a.txt", false, 42)]);
        let output = render_listing(&listing);
        let first = output.lines().next().unwrap();
        assert_eq!(first, "01/05/2024 09:07  42  a.txt");
    }

    #[test]
    fn test_render_size_right_aligned() {
        let listing = listing_of(vec![
            make_record("a.txt", false, 5),
            make_record("bb.txt", false, 1000),
        ]);

        let output = render_listing(&listing);
        let lines: Vec<&str> = output.lines().collect();

        // Size values end on the same column, names start on the same column
        let end_small = lines[0].find("5  a.txt").unwrap() + 1;
        let end_big = lines[1].find("1000  bb.txt").unwrap() + 4;
        assert_eq!(end_small, end_big);
        assert_eq!(lines[0].find("a.txt"), lines[1].find("bb.txt"));
    }

    #[test]
    fn test_render_keeps_trailing_space_in_name() {
        let listing = listing_of(vec![make_record("a ", false, 1)]);
        let output = render_listing(&listing);
        assert_eq!(output.lines().next().unwrap(), "01/05/2024 09:07  1  a ");
    }

    #[test]
    fn test_render_one_line_per_entry_with_newline_in_name() {
        let listing = listing_of(vec![
            make_record("two\nlines", false, 8),
            make_record("plain", false, 9),
        ]);

        let output = render_listing(&listing);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), listing.file_count + listing.dir_count + 2);
        assert!(lines[0].ends_with("  two\\nlines"));
        assert!(lines[1].ends_with("  plain"));
    }

    #[test]
    fn test_summary_lines() {
        let listing = Listing {
            entries: Vec::new(),
            file_count: 3,
            dir_count: 2,
            total_file_size: 1_048_576,
        };
        let [files, dirs] = summary_lines(&listing);
        assert_eq!(files, "3 File(s) 1048576 bytes");
        assert_eq!(dirs, "2 Dir(s)");
    }
}
