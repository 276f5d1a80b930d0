use crate::errors::Result;
use crate::utils::validate_score;

/// 及格线
pub const PASSING_AVERAGE: f64 = 5.0;
/// 最低出勤率（百分比）
pub const MINIMUM_ATTENDANCE: f64 = 75.0;

/// 保留一位小数，.5 进位
///
/// 加权平均是 1/8 的倍数，经常恰好落在 x.25、x.75 上；`{:.1}` 会向偶数舍入，
/// 所以展示前先经过这里。
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// 评分方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluationPolicy {
    Simple,   // 简单平均
    Weighted, // 加权平均 (1, 2, 3, 1, 1)
}

impl EvaluationPolicy {
    pub const SIMPLE: &'static str = "MEDIA_SIMPLES";
    pub const WEIGHTED: &'static str = "MEDIA_PONDERADA";

    /// 计算期末平均分
    ///
    /// 调用方负责保证分数在 [0, 10] 内，这里不做截断。
    pub fn compute(self, scores: &Scores) -> f64 {
        match self {
            EvaluationPolicy::Simple => {
                (scores.p1 + scores.p2 + scores.p3 + scores.exercises + scores.seminar) / 5.0
            }
            EvaluationPolicy::Weighted => {
                (scores.p1 + 2.0 * scores.p2 + 3.0 * scores.p3 + scores.exercises + scores.seminar)
                    / 8.0
            }
        }
    }

    /// 展示用名称
    pub fn label(self) -> &'static str {
        match self {
            EvaluationPolicy::Simple => "Média Simples",
            EvaluationPolicy::Weighted => "Média Ponderada",
        }
    }
}

impl std::fmt::Display for EvaluationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluationPolicy::Simple => write!(f, "{}", EvaluationPolicy::SIMPLE),
            EvaluationPolicy::Weighted => write!(f, "{}", EvaluationPolicy::WEIGHTED),
        }
    }
}

impl std::str::FromStr for EvaluationPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            EvaluationPolicy::SIMPLE => Ok(EvaluationPolicy::Simple),
            EvaluationPolicy::WEIGHTED => Ok(EvaluationPolicy::Weighted),
            _ => Err(format!("Invalid evaluation policy: {s}")),
        }
    }
}

/// 五项成绩：三次考试、习题、研讨
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scores {
    pub p1: f64,
    pub p2: f64,
    pub p3: f64,
    pub exercises: f64,
    pub seminar: f64,
}

impl Scores {
    pub fn new(p1: f64, p2: f64, p3: f64, exercises: f64, seminar: f64) -> Self {
        Self {
            p1,
            p2,
            p3,
            exercises,
            seminar,
        }
    }

    /// 校验每一项都在 [0, 10]
    pub fn validate(&self) -> Result<()> {
        validate_score("P1", self.p1)?;
        validate_score("P2", self.p2)?;
        validate_score("P3", self.p3)?;
        validate_score("Listas", self.exercises)?;
        validate_score("Seminário", self.seminar)?;
        Ok(())
    }
}

// 最终状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreStatus {
    Approved,
    FailedAttendance,
    FailedGrade,
}

impl std::fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreStatus::Approved => write!(f, "Aprovado"),
            ScoreStatus::FailedAttendance => write!(f, "Reprovado por Falta"),
            ScoreStatus::FailedGrade => write!(f, "Reprovado por Nota"),
        }
    }
}

/// 学生在某个教学班内的成绩与出勤记录
///
/// 平均分与是否通过都由当前字段推导，不单独存储。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreCard {
    scores: Scores,
    classes_held: u32,
    classes_attended: u32,
    policy: Option<EvaluationPolicy>,
}

impl ScoreCard {
    /// 绑定到教学班评分方式的空记录
    pub fn with_policy(policy: EvaluationPolicy) -> Self {
        Self {
            policy: Some(policy),
            ..Default::default()
        }
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    pub fn classes_held(&self) -> u32 {
        self.classes_held
    }

    pub fn classes_attended(&self) -> u32 {
        self.classes_attended
    }

    pub fn policy(&self) -> Option<EvaluationPolicy> {
        self.policy
    }

    pub(crate) fn set_policy(&mut self, policy: EvaluationPolicy) {
        self.policy = Some(policy);
    }

    /// 覆盖五项成绩（不累加）
    pub(crate) fn set_scores(&mut self, scores: Scores) {
        self.scores = scores;
    }

    /// 覆盖出勤计数
    pub(crate) fn set_attendance(&mut self, classes_held: u32, classes_attended: u32) {
        self.classes_held = classes_held;
        self.classes_attended = classes_attended;
    }

    pub fn average(&self) -> f64 {
        match self.policy {
            Some(policy) => policy.compute(&self.scores),
            None => 0.0,
        }
    }

    pub fn attendance_percentage(&self) -> f64 {
        if self.classes_held == 0 {
            return 0.0;
        }
        100.0 * f64::from(self.classes_attended) / f64::from(self.classes_held)
    }

    pub fn is_passing(&self) -> bool {
        self.average() >= PASSING_AVERAGE && self.attendance_percentage() >= MINIMUM_ATTENDANCE
    }

    /// 出勤不足优先于成绩不足
    pub fn status(&self) -> ScoreStatus {
        if self.is_passing() {
            ScoreStatus::Approved
        } else if self.attendance_percentage() < MINIMUM_ATTENDANCE {
            ScoreStatus::FailedAttendance
        } else {
            ScoreStatus::FailedGrade
        }
    }
}

impl std::fmt::Display for ScoreCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = &self.scores;
        writeln!(
            f,
            "P1: {:.1}, P2: {:.1}, P3: {:.1}, Listas: {:.1}, Seminário: {:.1}",
            round_one_decimal(s.p1),
            round_one_decimal(s.p2),
            round_one_decimal(s.p3),
            round_one_decimal(s.exercises),
            round_one_decimal(s.seminar)
        )?;
        write!(
            f,
            "Média Final: {:.1}, Frequência: {:.1}%, Situação: {}",
            round_one_decimal(self.average()),
            round_one_decimal(self.attendance_percentage()),
            self.status()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(policy: EvaluationPolicy, scores: Scores, held: u32, attended: u32) -> ScoreCard {
        let mut card = ScoreCard::with_policy(policy);
        card.set_scores(scores);
        card.set_attendance(held, attended);
        card
    }

    #[test]
    fn test_simple_policy() {
        let scores = Scores::new(8.0, 7.0, 9.0, 8.5, 9.0);
        let expected = (8.0 + 7.0 + 9.0 + 8.5 + 9.0) / 5.0;
        assert_eq!(EvaluationPolicy::Simple.compute(&scores), expected);
    }

    #[test]
    fn test_weighted_policy() {
        let scores = Scores::new(8.0, 7.0, 9.0, 8.5, 9.0);
        assert_eq!(EvaluationPolicy::Weighted.compute(&scores), 8.3125);

        let scores = Scores::new(10.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(EvaluationPolicy::Weighted.compute(&scores), 1.25);
    }

    #[test]
    fn test_policy_tags() {
        assert_eq!(EvaluationPolicy::Simple.to_string(), "MEDIA_SIMPLES");
        assert_eq!(
            "MEDIA_PONDERADA".parse::<EvaluationPolicy>(),
            Ok(EvaluationPolicy::Weighted)
        );
        assert!("WEIGHTED".parse::<EvaluationPolicy>().is_err());
    }

    #[test]
    fn test_unbound_card_has_zero_average() {
        let mut card = ScoreCard::default();
        card.set_scores(Scores::new(10.0, 10.0, 10.0, 10.0, 10.0));
        assert_eq!(card.average(), 0.0);
        assert_eq!(card.attendance_percentage(), 0.0);
    }

    #[test]
    fn test_attendance_percentage() {
        let card = card(EvaluationPolicy::Simple, Scores::default(), 60, 54);
        assert_eq!(card.attendance_percentage(), 90.0);
    }

    #[test]
    fn test_status_approved_on_boundaries() {
        let scores = Scores::new(5.0, 5.0, 5.0, 5.0, 5.0);
        let card = card(EvaluationPolicy::Simple, scores, 60, 54);
        assert_eq!(card.average(), 5.0);
        assert!(card.is_passing());
        assert_eq!(card.status(), ScoreStatus::Approved);

        let card_min = {
            let mut c = card.clone();
            c.set_attendance(4, 3);
            c
        };
        assert_eq!(card_min.attendance_percentage(), 75.0);
        assert_eq!(card_min.status(), ScoreStatus::Approved);
    }

    #[test]
    fn test_attendance_failure_takes_priority() {
        let scores = Scores::new(9.0, 9.0, 9.0, 9.0, 9.0);
        let card = card(EvaluationPolicy::Simple, scores, 60, 40);
        assert_eq!(card.average(), 9.0);
        assert_eq!(card.status(), ScoreStatus::FailedAttendance);

        let card = card_with_both_failing();
        assert_eq!(card.status(), ScoreStatus::FailedAttendance);
    }

    fn card_with_both_failing() -> ScoreCard {
        card(
            EvaluationPolicy::Weighted,
            Scores::new(1.0, 1.0, 1.0, 1.0, 1.0),
            10,
            2,
        )
    }

    #[test]
    fn test_grade_failure() {
        let scores = Scores::new(4.0, 4.0, 4.0, 4.0, 4.0);
        let card = card(EvaluationPolicy::Simple, scores, 60, 60);
        assert_eq!(card.status(), ScoreStatus::FailedGrade);
    }

    #[test]
    fn test_scores_validation() {
        assert!(Scores::new(0.0, 10.0, 5.5, 7.0, 3.0).validate().is_ok());
        let err = Scores::new(8.0, 7.0, 11.0, 8.5, 9.0).validate().unwrap_err();
        assert_eq!(err.code(), "E001");
        assert!(err.message().contains("P3"));
    }

    #[test]
    fn test_display_summary() {
        let card = card(
            EvaluationPolicy::Weighted,
            Scores::new(8.0, 7.0, 9.0, 8.5, 9.0),
            60,
            54,
        );
        let text = card.to_string();
        assert!(text.contains("P1: 8.0, P2: 7.0, P3: 9.0, Listas: 8.5, Seminário: 9.0"));
        assert!(text.contains("Média Final: 8.3, Frequência: 90.0%, Situação: Aprovado"));
    }

    #[test]
    fn test_round_one_decimal_ties_go_up() {
        assert_eq!(round_one_decimal(6.25), 6.3);
        assert_eq!(round_one_decimal(8.75), 8.8);
        assert_eq!(round_one_decimal(12.5), 12.5);
        assert_eq!(round_one_decimal(8.3125), 8.3);
        assert_eq!(round_one_decimal(0.0), 0.0);
    }

    #[test]
    fn test_display_rounds_ties_up() {
        let tied = card(
            EvaluationPolicy::Weighted,
            Scores::new(6.0, 6.0, 6.0, 6.0, 8.0),
            8,
            7,
        );
        assert_eq!(tied.average(), 6.25);
        assert_eq!(tied.attendance_percentage(), 87.5);
        assert!(
            tied.to_string()
                .contains("Média Final: 6.3, Frequência: 87.5%, Situação: Aprovado")
        );

        let partial = card(
            EvaluationPolicy::Simple,
            Scores::new(8.25, 0.0, 0.0, 0.0, 0.0),
            8,
            1,
        );
        let text = partial.to_string();
        assert!(text.contains("P1: 8.3, P2: 0.0"));
        assert!(text.contains("Frequência: 12.5%"));
    }
}
