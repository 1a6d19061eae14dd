use gitln_types::{Fields, Record, Separator};

/// Splits one raw line (terminator included) into a [`Record`].
///
/// Lines without the separator, and lines carrying fewer than four fields
/// after the graph prefix, come back as [`Record::GraphOnly`] holding the
/// untouched line.
pub fn split<'a>(line: &'a [u8], sep: &Separator) -> Record<'a> {
    let Some(start) = sep.find_in(line) else {
        return Record::GraphOnly(line);
    };
    let graph = &line[..start];
    let rest = trim_line_end(&line[start + sep.len()..]);

    let Some((hash, rest)) = take_field(rest, sep) else {
        return Record::GraphOnly(line);
    };
    let Some((date_raw, rest)) = take_field(rest, sep) else {
        return Record::GraphOnly(line);
    };
    let Some((subject, refs_raw)) = take_field(rest, sep) else {
        return Record::GraphOnly(line);
    };

    Record::Fields(Fields { graph, hash, date_raw, subject, refs_raw })
}

/// Returns the bytes before the next separator and everything after it.
fn take_field<'a>(buf: &'a [u8], sep: &Separator) -> Option<(&'a [u8], &'a [u8])> {
    let at = sep.find_in(buf)?;
    Some((&buf[..at], &buf[at + sep.len()..]))
}

fn trim_line_end(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
