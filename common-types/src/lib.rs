#[allow(non_snake_case)]
pub mod Generate {
    use ::std::fmt;
    use ::std::str;
    use serde::{Deserialize, Serialize};
    use derive_builder::Builder;

    #[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Grade {
        Third,
        Fourth,
        Fifth,
        Sixth,
    }

    pub const GRADES: [Grade; 4] = [Grade::Third, Grade::Fourth, Grade::Fifth, Grade::Sixth];

    impl Grade {
        pub fn label(&self) -> &'static str {
            match self {
                Grade::Third => "小3",
                Grade::Fourth => "小4",
                Grade::Fifth => "小5",
                Grade::Sixth => "小6",
            }
        }
        pub fn recommended_topics(&self) -> &'static [Topic] {
            match self {
                Grade::Third => &[
                    Topic::IntegerAddSub,
                    Topic::MultiplicationColumn,
                    Topic::DivisionWithRemainder,
                ],
                Grade::Fourth => &[
                    Topic::LargeNumbers,
                    Topic::DecimalArithmetic,
                    Topic::FactorsMultiples,
                    Topic::FractionAddSub,
                ],
                Grade::Fifth => &[
                    Topic::FractionMixed,
                    Topic::DecimalFractionProducts,
                    Topic::PercentageBasic,
                    Topic::RatioBasic,
                ],
                Grade::Sixth => &[
                    Topic::FractionDecimalCompound,
                    Topic::InverseBox,
                    Topic::GcdLcm,
                    Topic::ProportionBasic,
                ],
            }
        }
    }

    impl fmt::Display for Grade {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "{}", self.label())
        }
    }

    impl str::FromStr for Grade {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim() {
                "小3" | "3" => Ok(Grade::Third),
                "小4" | "4" => Ok(Grade::Fourth),
                "小5" | "5" => Ok(Grade::Fifth),
                "小6" | "6" => Ok(Grade::Sixth),
                _ => Err(format!("'{}' is not a valid Grade", s)),
            }
        }
    }

    #[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
    pub enum Topic {
        // 小3
        IntegerAddSub,
        MultiplicationColumn,
        DivisionWithRemainder,
        // 小4
        LargeNumbers,
        DecimalArithmetic,
        FactorsMultiples,
        FractionAddSub,
        // 小5
        FractionMixed,
        DecimalFractionProducts,
        PercentageBasic,
        RatioBasic,
        // 小6
        FractionDecimalCompound,
        InverseBox,
        GcdLcm,
        ProportionBasic,
    }

    pub const TOPICS: [Topic; 15] = [
        Topic::IntegerAddSub,
        Topic::MultiplicationColumn,
        Topic::DivisionWithRemainder,
        Topic::LargeNumbers,
        Topic::DecimalArithmetic,
        Topic::FactorsMultiples,
        Topic::FractionAddSub,
        Topic::FractionMixed,
        Topic::DecimalFractionProducts,
        Topic::PercentageBasic,
        Topic::RatioBasic,
        Topic::FractionDecimalCompound,
        Topic::InverseBox,
        Topic::GcdLcm,
        Topic::ProportionBasic,
    ];

    impl Topic {
        pub fn label(&self) -> &'static str {
            match self {
                Topic::IntegerAddSub => "整数のたし算・ひき算",
                Topic::MultiplicationColumn => "かけ算の筆算",
                Topic::DivisionWithRemainder => "わり算（あまりあり）",
                Topic::LargeNumbers => "大きな数と筆算",
                Topic::DecimalArithmetic => "小数の四則",
                Topic::FactorsMultiples => "約数・倍数（計算）",
                Topic::FractionAddSub => "分数のたし算・ひき算",
                Topic::FractionMixed => "分数の四則混合",
                Topic::DecimalFractionProducts => "小数×分数・分数×分数",
                Topic::PercentageBasic => "割合の基本計算",
                Topic::RatioBasic => "比の基本計算",
                Topic::FractionDecimalCompound => "分数・小数の複合計算",
                Topic::InverseBox => "逆算（□を求める）",
                Topic::GcdLcm => "最大公約数・最小公倍数",
                Topic::ProportionBasic => "比例・反比例の基本計算",
            }
        }
    }

    impl fmt::Display for Topic {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "{}", self.label())
        }
    }

    impl str::FromStr for Topic {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim() {
                // older worksheets close this label with a half-width paren
                "約数・倍数（計算)" => Ok(Topic::FactorsMultiples),
                label => TOPICS
                    .iter()
                    .find(|topic| topic.label() == label)
                    .copied()
                    .ok_or_else(|| format!("'{}' is not a valid Topic", s)),
            }
        }
    }

    #[derive(Deserialize, Serialize, Debug, Clone, Builder)]
    #[builder(setter(into))]
    pub struct BatchRequest {
        pub seed: u64,
        #[builder(default)]
        pub grade: Option<Grade>,
        #[builder(default)]
        pub topics: Vec<String>,
        #[builder(default = "3")]
        pub difficulty: u8,
        #[builder(default = "10")]
        pub count: usize,
    }

    impl BatchRequest {
        /// Topic names to generate from. An empty selection falls back to the
        /// grade's recommended topics when a grade is set.
        pub fn effective_topics(&self) -> Vec<String> {
            if !self.topics.is_empty() {
                return self.topics.clone();
            }
            match self.grade {
                Some(grade) => grade
                    .recommended_topics()
                    .iter()
                    .map(|topic| topic.label().to_string())
                    .collect(),
                None => Vec::new(),
            }
        }
    }

    pub fn str_to_grade<T: AsRef<str>>(grade: T) -> Result<Grade, String> {
        grade.as_ref().parse()
    }

}
