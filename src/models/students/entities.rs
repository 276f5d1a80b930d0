use crate::models::courses::entities::Course;
use crate::models::people::entities::Person;

/// 特殊学生可同时修读的课程上限
pub const SPECIAL_STUDENT_MAX_COURSES: usize = 2;

// 学生类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentKind {
    Standard, // 普通学生：需满足先修课程
    Special,  // 特殊学生：最多两门课，不计成绩
}

/// 选课资格判定函数
pub type EligibilityCheck = fn(&Student, &Course) -> bool;

impl StudentKind {
    pub const STANDARD: &'static str = "NORMAL";
    pub const SPECIAL: &'static str = "ESPECIAL";

    /// 按类型选择资格判定函数
    pub fn eligibility(self) -> EligibilityCheck {
        match self {
            StudentKind::Standard => prerequisites_satisfied,
            StudentKind::Special => below_special_limit,
        }
    }

    /// 特殊学生不接收成绩
    pub fn receives_grades(self) -> bool {
        match self {
            StudentKind::Standard => true,
            StudentKind::Special => false,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StudentKind::Standard => "Normal",
            StudentKind::Special => "Especial",
        }
    }
}

// 先修课程是否都已在已选课程集合内（只看选课记录，不看是否通过）
fn prerequisites_satisfied(student: &Student, course: &Course) -> bool {
    course
        .prerequisites()
        .iter()
        .all(|code| student.is_enrolled_in(code))
}

fn below_special_limit(student: &Student, _course: &Course) -> bool {
    student.enrolled_courses().len() < SPECIAL_STUDENT_MAX_COURSES
}

impl std::fmt::Display for StudentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudentKind::Standard => write!(f, "{}", StudentKind::STANDARD),
            StudentKind::Special => write!(f, "{}", StudentKind::SPECIAL),
        }
    }
}

impl std::str::FromStr for StudentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            StudentKind::STANDARD => Ok(StudentKind::Standard),
            StudentKind::SPECIAL => Ok(StudentKind::Special),
            _ => Err(format!("Invalid student kind: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    person: Person,
    pub course_of_study: String,
    kind: StudentKind,
    enrolled_courses: Vec<String>,
    semester_locked: bool,
}

impl Student {
    pub fn new<N, I, C>(name: N, id: I, course_of_study: C, kind: StudentKind) -> Self
    where
        N: Into<String>,
        I: Into<String>,
        C: Into<String>,
    {
        Self {
            person: Person::new(name, id),
            course_of_study: course_of_study.into(),
            kind,
            enrolled_courses: Vec::new(),
            semester_locked: false,
        }
    }

    pub fn standard<N: Into<String>, I: Into<String>, C: Into<String>>(
        name: N,
        id: I,
        course_of_study: C,
    ) -> Self {
        Self::new(name, id, course_of_study, StudentKind::Standard)
    }

    pub fn special<N: Into<String>, I: Into<String>, C: Into<String>>(
        name: N,
        id: I,
        course_of_study: C,
    ) -> Self {
        Self::new(name, id, course_of_study, StudentKind::Special)
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

    pub fn kind(&self) -> StudentKind {
        self.kind
    }

    pub fn receives_grades(&self) -> bool {
        self.kind.receives_grades()
    }

    pub fn enrolled_courses(&self) -> &[String] {
        &self.enrolled_courses
    }

    pub fn is_enrolled_in(&self, course_code: &str) -> bool {
        self.enrolled_courses.iter().any(|c| c == course_code)
    }

    pub fn is_semester_locked(&self) -> bool {
        self.semester_locked
    }

    pub fn can_enroll(&self, course: &Course) -> bool {
        (self.kind.eligibility())(self, course)
    }

    /// 选课
    ///
    /// 学期已锁定、资格不满足或已选该课程时返回 false。
    pub fn enroll(&mut self, course: &Course) -> bool {
        if self.semester_locked || !self.can_enroll(course) {
            return false;
        }
        if self.is_enrolled_in(course.code()) {
            return false;
        }
        self.enrolled_courses.push(course.code().to_string());
        true
    }

    /// 退课，未选该课程时返回 false
    pub fn withdraw(&mut self, course_code: &str) -> bool {
        let before = self.enrolled_courses.len();
        self.enrolled_courses.retain(|c| c != course_code);
        self.enrolled_courses.len() != before
    }

    /// 锁定学期：清空全部已选课程
    pub fn lock_semester(&mut self) {
        self.semester_locked = true;
        self.enrolled_courses.clear();
    }

    /// 解除锁定，不恢复已清空的选课
    pub fn unlock_semester(&mut self) {
        self.semester_locked = false;
    }

    /// 从持久化数据恢复已选课程，不经过资格检查
    pub(crate) fn restore_course<C: Into<String>>(&mut self, course_code: C) -> bool {
        let course_code = course_code.into();
        if self.semester_locked || self.is_enrolled_in(&course_code) {
            return false;
        }
        self.enrolled_courses.push(course_code);
        true
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Aluno {}: {} ({}) - {}",
            self.kind.label(),
            self.name(),
            self.id(),
            self.course_of_study
        )
    }
}
