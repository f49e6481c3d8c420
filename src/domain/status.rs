use super::Employee;

/// Current attendance state of one employee.
///
/// `id` is assigned when the record is created and never changes; the stamp
/// fields (`status`, `date`, `time`) are overwritten by each later punch.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusRecord {
    pub id: String,
    pub display_name: String,
    pub full_name: String,
    pub status: String,
    pub date: String,
    pub time: String,
    pub office: String,
    pub groups: Vec<String>,
}

/// The stamp produced by a single punch.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStatus {
    pub status: String,
    pub date: String,
    pub time: String,
}

impl StatusRecord {
    /// Builds the first record for `employee`, copying its identity and metadata.
    pub fn from_punch(id: String, employee: &Employee, stamp: NewStatus) -> Self {
        Self {
            id,
            display_name: employee.display_name.clone(),
            full_name: employee.full_name.clone(),
            status: stamp.status,
            date: stamp.date,
            time: stamp.time,
            office: employee.office.clone(),
            groups: employee.groups.clone(),
        }
    }

    pub fn apply(&mut self, stamp: NewStatus) {
        self.status = stamp.status;
        self.date = stamp.date;
        self.time = stamp.time;
    }

    pub fn matches(&self, display_name: &str) -> bool {
        self.display_name.to_lowercase() == display_name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(status: &str) -> NewStatus {
        NewStatus {
            status: status.to_string(),
            date: "2024-3-07".to_string(),
            time: "9:05".to_string(),
        }
    }

    #[test]
    fn test_from_punch_copies_employee_metadata() {
        let emp = Employee::new("bob", "Bob B", "p1", "HQ", vec!["eng".into()]);
        let record = StatusRecord::from_punch("id_1".into(), &emp, stamp("in"));

        assert_eq!(record.id, "id_1");
        assert_eq!(record.full_name, "Bob B");
        assert_eq!(record.office, "HQ");
        assert_eq!(record.groups, vec!["eng".to_string()]);
        assert_eq!(record.status, "in");
    }

    #[test]
    fn test_apply_keeps_identity() {
        let emp = Employee::new("bob", "Bob B", "p1", "HQ", vec![]);
        let mut record = StatusRecord::from_punch("id_1".into(), &emp, stamp("in"));
        record.apply(NewStatus {
            status: "out".into(),
            date: "2024-3-08".into(),
            time: "17:30".into(),
        });

        assert_eq!(record.id, "id_1");
        assert_eq!(record.display_name, "bob");
        assert_eq!(record.status, "out");
        assert_eq!(record.date, "2024-3-08");
        assert_eq!(record.time, "17:30");
    }
}
