// Record management: resumes, jobs, user accounts and text import.
// Every route here requires a session; user routes additionally require Admin.

pub mod handlers;
pub mod import;
