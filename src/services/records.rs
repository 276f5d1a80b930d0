use super::catalog::CatalogService;
use super::students::StudentService;

/// 学籍系统的统一入口
///
/// 持有学生登记簿与课程目录。跨登记簿的流程（选课、退课、锁定学期、
/// 登记成绩与出勤）见 `enrollment`，报表见 `reports`。
#[derive(Debug, Default)]
pub struct AcademicRecords {
    pub(crate) students: StudentService,
    pub(crate) catalog: CatalogService,
}

impl AcademicRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &StudentService {
        &self.students
    }

    pub fn students_mut(&mut self) -> &mut StudentService {
        &mut self.students
    }

    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogService {
        &mut self.catalog
    }

    pub fn clear(&mut self) {
        self.students.clear();
        self.catalog.clear();
    }
}
