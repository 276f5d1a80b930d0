use crate::models::people::entities::Person;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Professor {
    person: Person,
    pub department: String,
    classes_taught: Vec<String>,
}

impl Professor {
    pub fn new<N, I, D>(name: N, id: I, department: D) -> Self
    where
        N: Into<String>,
        I: Into<String>,
        D: Into<String>,
    {
        Self {
            person: Person::new(name, id),
            department: department.into(),
            classes_taught: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        self.person.id()
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn set_name<N: Into<String>>(&mut self, name: N) {
        self.person.set_name(name);
    }

    /// 所授教学班代码
    pub fn classes_taught(&self) -> &[String] {
        &self.classes_taught
    }

    pub fn add_class<C: Into<String>>(&mut self, class_code: C) -> bool {
        let class_code = class_code.into();
        if self.classes_taught.contains(&class_code) {
            return false;
        }
        self.classes_taught.push(class_code);
        true
    }

    pub fn remove_class(&mut self, class_code: &str) -> bool {
        let before = self.classes_taught.len();
        self.classes_taught.retain(|c| c != class_code);
        self.classes_taught.len() != before
    }
}

impl std::fmt::Display for Professor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Prof. {} ({}) - {}", self.name(), self.id(), self.department)
    }
}
