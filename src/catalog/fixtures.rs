//! Built-in mock collections and their screen declarations
//!
//! The data mirrors what the dashboard renders.

use serde_json::{json, Value};

use crate::query::{RangeTarget, SortSpec};
use crate::record::Record;
use crate::schema::{FieldKind, ScreenSchema};

pub const USERS: &str = "users";
pub const DOCTORS: &str = "doctors";
pub const APPOINTMENTS: &str = "appointments";
pub const MEDICATIONS: &str = "medications";
pub const REPORTS: &str = "reports";
pub const SYMPTOM_LOGS: &str = "symptom-logs";

/// Screen names in dashboard navigation order
pub const SCREEN_NAMES: [&str; 6] = [
    USERS,
    DOCTORS,
    APPOINTMENTS,
    MEDICATIONS,
    REPORTS,
    SYMPTOM_LOGS,
];

fn to_records(values: Vec<Value>) -> Vec<Record> {
    values.into_iter().filter_map(Record::from_value).collect()
}

pub fn users_schema() -> ScreenSchema {
    ScreenSchema::new(USERS)
        .with_field("id", FieldKind::Number)
        .with_field("createdAt", FieldKind::Date)
        .searchable(["name", "email"])
        .filterable(["role", "status"])
        .with_range(RangeTarget::point("createdAt"))
        .with_default_sort(SortSpec::asc("id"))
}

pub fn users() -> Vec<Record> {
    to_records(vec![
        json!({"id": 1, "name": "John Doe", "email": "john@example.com", "role": "Patient", "status": "Active", "createdAt": "2023-01-15"}),
        json!({"id": 2, "name": "Jane Smith", "email": "jane@example.com", "role": "Patient", "status": "Inactive", "createdAt": "2023-02-20"}),
        json!({"id": 3, "name": "Dr. Robert", "email": "robert@example.com", "role": "Doctor", "status": "Active", "createdAt": "2023-03-10"}),
    ])
}

pub fn doctors_schema() -> ScreenSchema {
    ScreenSchema::new(DOCTORS)
        .with_field("id", FieldKind::Number)
        .with_field("availability", FieldKind::Number)
        .searchable(["name", "specialization", "email"])
        .filterable(["status", "specialization"])
        .with_default_sort(SortSpec::asc("id"))
}

pub fn doctors() -> Vec<Record> {
    to_records(vec![
        json!({"id": 1, "name": "Dr. Robert Johnson", "specialization": "Cardiology", "availability": 3, "status": "Active", "email": "r.johnson@clinic.com", "phone": "(555) 123-4567"}),
        json!({"id": 2, "name": "Dr. Anna Lee", "specialization": "Dermatology", "availability": 2, "status": "Inactive", "email": "a.lee@clinic.com", "phone": "(555) 234-5678"}),
        json!({"id": 3, "name": "Dr. Mark Smith", "specialization": "Pediatrics", "availability": 5, "status": "Active", "email": "m.smith@clinic.com", "phone": "(555) 345-6789"}),
        json!({"id": 4, "name": "Dr. Sarah Williams", "specialization": "Neurology", "availability": 1, "status": "Active", "email": "s.williams@clinic.com", "phone": "(555) 456-7890"}),
        json!({"id": 5, "name": "Dr. James Wilson", "specialization": "Orthopedics", "availability": 4, "status": "Active", "email": "j.wilson@clinic.com", "phone": "(555) 567-8901"}),
    ])
}

pub fn appointments_schema() -> ScreenSchema {
    ScreenSchema::new(APPOINTMENTS)
        .with_field("id", FieldKind::Number)
        .with_field(
            "date",
            FieldKind::DateTime {
                time_field: "time".into(),
            },
        )
        .with_field("time", FieldKind::Clock12h)
        .with_field("duration", FieldKind::Number)
        .searchable(["patient", "doctor", "reason"])
        .filterable(["status", "doctor"])
        .with_range(RangeTarget::point("date"))
        .with_default_sort(SortSpec::asc("date"))
}

pub fn appointments() -> Vec<Record> {
    to_records(vec![
        json!({
            "id": 1, "patient": "John Doe", "patientId": "P1001",
            "doctor": "Dr. Smith", "doctorId": "D2001",
            "date": "2025-06-12", "time": "10:00 AM", "duration": 30,
            "status": "Confirmed", "reason": "Annual checkup",
            "notes": "Patient has allergy to penicillin"
        }),
        json!({
            "id": 2, "patient": "Jane Doe", "patientId": "P1002",
            "doctor": "Dr. Adams", "doctorId": "D2002",
            "date": "2025-06-13", "time": "02:30 PM", "duration": 45,
            "status": "Pending", "reason": "Back pain consultation",
            "notes": "Prefers afternoon appointments"
        }),
        json!({
            "id": 3, "patient": "Robert Paul", "patientId": "P1003",
            "doctor": "Dr. Watson", "doctorId": "D2003",
            "date": "2025-06-14", "time": "11:15 AM", "duration": 60,
            "status": "Cancelled", "reason": "Dermatology follow-up",
            "notes": "Rescheduled to next week"
        }),
        json!({
            "id": 4, "patient": "Emily Johnson", "patientId": "P1004",
            "doctor": "Dr. Smith", "doctorId": "D2001",
            "date": "2025-06-12", "time": "03:00 PM", "duration": 30,
            "status": "Confirmed", "reason": "Vaccination",
            "notes": "Needs flu shot"
        }),
        json!({
            "id": 5, "patient": "Michael Brown", "patientId": "P1005",
            "doctor": "Dr. Adams", "doctorId": "D2002",
            "date": "2025-06-15", "time": "09:00 AM", "duration": 60,
            "status": "Pending", "reason": "Physical therapy evaluation",
            "notes": "Recent knee surgery"
        }),
    ])
}

pub fn medications_schema() -> ScreenSchema {
    ScreenSchema::new(MEDICATIONS)
        .with_field("id", FieldKind::Number)
        .with_field("time", FieldKind::Clock12h)
        .with_field("startDate", FieldKind::Date)
        .with_field("endDate", FieldKind::Date)
        .searchable(["name", "user", "prescribedBy"])
        .filterable(["status", "user"])
        .with_range(RangeTarget::interval("startDate", "endDate"))
        .with_default_sort(SortSpec::asc("time"))
}

pub fn medications() -> Vec<Record> {
    to_records(vec![
        json!({
            "id": 1, "user": "John Doe", "userId": "P1001",
            "name": "Paracetamol", "dosage": "500mg", "frequency": "Every 6 hours",
            "time": "08:00 AM", "startDate": "2025-06-01", "endDate": "2025-06-07",
            "status": "Scheduled", "instructions": "Take with food",
            "prescribedBy": "Dr. Smith"
        }),
        json!({
            "id": 2, "user": "Jane Smith", "userId": "P1002",
            "name": "Amoxicillin", "dosage": "250mg", "frequency": "Twice daily",
            "time": "02:00 PM", "startDate": "2025-06-05", "endDate": "2025-06-12",
            "status": "Completed", "instructions": "Complete full course",
            "prescribedBy": "Dr. Johnson"
        }),
        json!({
            "id": 3, "user": "Robert Wilson", "userId": "P1003",
            "name": "Ibuprofen", "dosage": "400mg", "frequency": "Every 8 hours",
            "time": "10:00 AM", "startDate": "2025-06-10", "endDate": "2025-06-17",
            "status": "Missed", "instructions": "Take with plenty of water",
            "prescribedBy": "Dr. Lee"
        }),
        json!({
            "id": 4, "user": "Emily Davis", "userId": "P1004",
            "name": "Lisinopril", "dosage": "10mg", "frequency": "Once daily",
            "time": "07:00 AM", "startDate": "2025-05-15", "endDate": "2025-08-15",
            "status": "Scheduled", "instructions": "Take in the morning",
            "prescribedBy": "Dr. Wilson"
        }),
        json!({
            "id": 5, "user": "Michael Brown", "userId": "P1005",
            "name": "Metformin", "dosage": "500mg", "frequency": "Twice daily",
            "time": "08:00 AM, 08:00 PM", "startDate": "2025-04-20", "endDate": "2025-10-20",
            "status": "Scheduled", "instructions": "Take with meals",
            "prescribedBy": "Dr. Adams"
        }),
    ])
}

pub fn reports_schema() -> ScreenSchema {
    ScreenSchema::new(REPORTS)
        .with_field("id", FieldKind::Number)
        .with_field("date", FieldKind::Date)
        .searchable(["user", "title", "type"])
        .filterable(["type"])
        .with_range(RangeTarget::point("date"))
        .with_default_sort(SortSpec::desc("date"))
}

pub fn reports() -> Vec<Record> {
    to_records(vec![
        json!({"id": 1, "user": "John Doe", "title": "Blood Test Report", "type": "PDF", "date": "2025-06-05", "size": "2.4 MB"}),
        json!({"id": 2, "user": "Jane Smith", "title": "X-Ray Scan", "type": "Image", "date": "2025-06-01", "size": "5.1 MB"}),
        json!({"id": 3, "user": "Robert Wilson", "title": "MRI Report", "type": "PDF", "date": "2025-05-30", "size": "3.7 MB"}),
        json!({"id": 4, "user": "Emily Johnson", "title": "Doctor Consultation Notes", "type": "Document", "date": "2025-05-28", "size": "0.8 MB"}),
    ])
}

pub fn symptom_logs_schema() -> ScreenSchema {
    ScreenSchema::new(SYMPTOM_LOGS)
        .with_field("id", FieldKind::Number)
        .with_field("timestamp", FieldKind::Timestamp)
        .searchable(["symptom", "userName"])
        .filterable(["userId", "status"])
        .with_range(RangeTarget::point("timestamp"))
}

pub fn symptom_logs() -> Vec<Record> {
    to_records(vec![
        json!({"id": 1, "userId": "u1001", "userName": "John Doe", "symptom": "Persistent headache and dizziness", "severity": "High", "timestamp": "2025-06-10T08:30:00Z", "status": "Unreviewed"}),
        json!({"id": 2, "userId": "u1002", "userName": "Jane Smith", "symptom": "Mild fever (99.5°F)", "severity": "Medium", "timestamp": "2025-06-09T14:15:00Z", "status": "Reviewed"}),
        json!({"id": 3, "userId": "u1003", "userName": "Robert Wilson", "symptom": "Cough and sore throat", "severity": "Medium", "timestamp": "2025-06-08T19:45:00Z", "status": "Escalated"}),
        json!({"id": 4, "userId": "u1001", "userName": "John Doe", "symptom": "Nausea after meals", "severity": "Low", "timestamp": "2025-06-07T12:20:00Z", "status": "Reviewed"}),
    ])
}

/// Every built-in screen with its records, in navigation order
pub fn all() -> Vec<(ScreenSchema, Vec<Record>)> {
    vec![
        (users_schema(), users()),
        (doctors_schema(), doctors()),
        (appointments_schema(), appointments()),
        (medications_schema(), medications()),
        (reports_schema(), reports()),
        (symptom_logs_schema(), symptom_logs()),
    ]
}
