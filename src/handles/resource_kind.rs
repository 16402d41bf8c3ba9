use std::fmt;

/// The kinds of resources handed out by a connection pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A session with the database.
    Connection,
    /// Statement without parameters, executing ad hoc SQL text.
    Statement,
    /// Statement compiled once from SQL text with parameter placeholders.
    PreparedStatement,
    /// Prepared statement invoking a stored procedure.
    CallableStatement,
    /// Cursor over the rows produced by executing a statement.
    ResultSet,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ResourceKind::Connection => "connection",
            ResourceKind::Statement => "statement",
            ResourceKind::PreparedStatement => "prepared statement",
            ResourceKind::CallableStatement => "callable statement",
            ResourceKind::ResultSet => "result set",
        };
        f.write_str(text)
    }
}
