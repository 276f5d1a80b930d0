/// 课程（Disciplina）
///
/// 以 `code` 作为身份标识。先修课程与开设的教学班都只保存代码，
/// 通过目录服务查找实体。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub name: String,
    code: String,
    pub credit_hours: u32,
    prerequisites: Vec<String>,
    classes: Vec<String>,
}

impl Course {
    pub fn new<N: Into<String>, C: Into<String>>(name: N, code: C, credit_hours: u32) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            credit_hours,
            prerequisites: Vec::new(),
            classes: Vec::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_prerequisite(&self, code: &str) -> bool {
        self.prerequisites.iter().any(|p| p == code)
    }

    /// 添加先修课程；自身或重复代码返回 false
    pub fn add_prerequisite<C: Into<String>>(&mut self, code: C) -> bool {
        let code = code.into();
        if code == self.code || self.has_prerequisite(&code) {
            return false;
        }
        self.prerequisites.push(code);
        true
    }

    pub fn remove_prerequisite(&mut self, code: &str) -> bool {
        let before = self.prerequisites.len();
        self.prerequisites.retain(|p| p != code);
        self.prerequisites.len() != before
    }

    pub fn add_class<C: Into<String>>(&mut self, class_code: C) -> bool {
        let class_code = class_code.into();
        if self.classes.contains(&class_code) {
            return false;
        }
        self.classes.push(class_code);
        true
    }

    pub fn remove_class(&mut self, class_code: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class_code);
        self.classes.len() != before
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) - {}h", self.name, self.code, self.credit_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prerequisites_are_unique_and_not_self() {
        let mut calc2 = Course::new("Cálculo 2", "CALC2", 90);
        assert!(calc2.add_prerequisite("CALC1"));
        assert!(!calc2.add_prerequisite("CALC1"));
        assert!(!calc2.add_prerequisite("CALC2"));
        assert_eq!(calc2.prerequisites(), &["CALC1".to_string()]);

        assert!(calc2.remove_prerequisite("CALC1"));
        assert!(!calc2.remove_prerequisite("CALC1"));
        assert!(calc2.prerequisites().is_empty());
    }

    #[test]
    fn test_classes_keep_insertion_order() {
        let mut calc1 = Course::new("Cálculo 1", "CALC1", 60);
        calc1.add_class("CALC1-B");
        calc1.add_class("CALC1-A");
        assert!(!calc1.add_class("CALC1-B"));
        assert_eq!(calc1.classes(), &["CALC1-B".to_string(), "CALC1-A".to_string()]);
        assert_eq!(calc1.to_string(), "Cálculo 1 (CALC1) - 60h");
    }
}
