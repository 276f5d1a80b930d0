/// 学生与教师共用的身份信息
///
/// `id`（学号/工号）创建后不可修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    id: String,
}

impl Person {
    pub fn new<N: Into<String>, I: Into<String>>(name: N, id: I) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_name<N: Into<String>>(&mut self, name: N) {
        self.name = name.into();
    }
}
