//! Demo records written on first start and after a reset.

use crate::models::{Job, Resume, Role, User};

pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "System Admin".to_string(),
            username: "admin".to_string(),
            password: "admin123".to_string(),
            role: Role::Admin,
        },
        User {
            id: 2,
            name: "HR Manager".to_string(),
            username: "hr".to_string(),
            password: "hr123".to_string(),
            role: Role::HR,
        },
    ]
}

pub fn demo_resumes() -> Vec<Resume> {
    vec![
        Resume {
            id: 1,
            name: "Praveen Kumar".to_string(),
            email: "praveen@example.com".to_string(),
            headline: "Junior Data Analyst".to_string(),
            skills: "Excel, Power BI, SQL, Google Sheets".to_string(),
            summary: "1+ years experience working with dashboards, reports and data cleaning."
                .to_string(),
        },
        Resume {
            id: 2,
            name: "Amit Sharma".to_string(),
            email: "amit@example.com".to_string(),
            headline: "Junior Accountant".to_string(),
            skills: "Tally, Busy, Excel, GST".to_string(),
            summary: "Accounting graduate with experience in day-to-day bookkeeping, GST and TDS."
                .to_string(),
        },
    ]
}

pub fn demo_jobs() -> Vec<Job> {
    vec![
        Job {
            id: 1,
            title: "Junior Data Analyst".to_string(),
            department: "Analytics".to_string(),
            location: "Jaipur".to_string(),
            skills: "Excel, Power BI, SQL".to_string(),
            description: "Support business intelligence reporting using Excel and Power BI. \
                          Work on data cleaning, dashboards and ad-hoc analysis."
                .to_string(),
        },
        Job {
            id: 2,
            title: "Junior Accountant".to_string(),
            department: "Finance".to_string(),
            location: "Jaipur".to_string(),
            skills: "Tally, Busy, Excel, GST".to_string(),
            description: "Maintain books of accounts, manage GST returns, TDS, and coordinate \
                          with finance team."
                .to_string(),
        },
    ]
}
