/// One input line, classified by the splitter.
///
/// Borrows the line; a record never outlives the line it was split from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    /// Graph edges only (or a malformed line). Holds the whole line,
    /// terminator included, to be written back unchanged.
    GraphOnly(&'a [u8]),

    /// A commit line.
    Fields(Fields<'a>),
}

/// The logical fields of a commit line, in the order git emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields<'a> {
    /// Graph glyphs and padding drawn by `git log --graph`; may be empty.
    pub graph: &'a [u8],
    pub hash: &'a [u8],
    /// `%ar` phrase ("3 weeks ago") or `%at` seconds since the epoch.
    pub date_raw: &'a [u8],
    pub subject: &'a [u8],
    /// `%D` output, possibly with git's color escapes.
    pub refs_raw: &'a [u8],
}

impl<'a> Record<'a> {
    pub fn fields(&self) -> Option<&Fields<'a>> {
        match self {
            Record::Fields(fields) => Some(fields),
            Record::GraphOnly(_) => None,
        }
    }
}
