use serde::{Deserialize, Serialize};

/// A single entry of the nutrition vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Protein,
    Carbohydrates,
    Fats,
    Fiber,
    Calcium,
    Iron,
    VitaminC,
    Sodium,
    FreeSugar,
    Folate,
}

impl Nutrient {
    pub const ALL: [Nutrient; 10] = [
        Nutrient::Protein,
        Nutrient::Carbohydrates,
        Nutrient::Fats,
        Nutrient::Fiber,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::VitaminC,
        Nutrient::Sodium,
        Nutrient::FreeSugar,
        Nutrient::Folate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Protein => "Protein",
            Nutrient::Carbohydrates => "Carbohydrates",
            Nutrient::Fats => "Fats",
            Nutrient::Fiber => "Fiber",
            Nutrient::Calcium => "Calcium",
            Nutrient::Iron => "Iron",
            Nutrient::VitaminC => "Vitamin C",
            Nutrient::Sodium => "Sodium",
            Nutrient::FreeSugar => "Free Sugar",
            Nutrient::Folate => "Folate",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Protein
            | Nutrient::Carbohydrates
            | Nutrient::Fats
            | Nutrient::Fiber
            | Nutrient::FreeSugar => "g",
            Nutrient::Calcium | Nutrient::Iron | Nutrient::VitaminC | Nutrient::Sodium => "mg",
            Nutrient::Folate => "µg",
        }
    }

    /// Decimal places used when displaying an amount.
    pub fn precision(self) -> usize {
        match self {
            Nutrient::Calcium | Nutrient::Sodium | Nutrient::Folate => 0,
            _ => 1,
        }
    }
}

/// Nutrition facts for a food item, meal or whole plan.
///
/// Every field is optional. A missing value (absent key or `null`) counts as
/// zero in arithmetic but stays distinguishable from an explicit zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fats: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iron: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_sugar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folate: Option<f64>,
}

impl NutritionInfo {
    /// Raw field, `None` when the service did not report it.
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Protein => self.protein,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Fats => self.fats,
            Nutrient::Fiber => self.fiber,
            Nutrient::Calcium => self.calcium,
            Nutrient::Iron => self.iron,
            Nutrient::VitaminC => self.vitamin_c,
            Nutrient::Sodium => self.sodium,
            Nutrient::FreeSugar => self.free_sugar,
            Nutrient::Folate => self.folate,
        }
    }

    fn slot_mut(&mut self, nutrient: Nutrient) -> &mut Option<f64> {
        match nutrient {
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbohydrates => &mut self.carbohydrates,
            Nutrient::Fats => &mut self.fats,
            Nutrient::Fiber => &mut self.fiber,
            Nutrient::Calcium => &mut self.calcium,
            Nutrient::Iron => &mut self.iron,
            Nutrient::VitaminC => &mut self.vitamin_c,
            Nutrient::Sodium => &mut self.sodium,
            Nutrient::FreeSugar => &mut self.free_sugar,
            Nutrient::Folate => &mut self.folate,
        }
    }

    /// Value for arithmetic: absent counts as zero.
    #[inline]
    pub fn amount(&self, nutrient: Nutrient) -> f64 {
        self.get(nutrient).unwrap_or(0.0)
    }

    /// Adds every field of `other` into `self`, treating absent values as zero.
    pub fn accumulate(&mut self, other: &NutritionInfo) {
        for nutrient in Nutrient::ALL {
            let slot = self.slot_mut(nutrient);
            *slot = Some(slot.unwrap_or(0.0) + other.amount(nutrient));
        }
    }

    /// A vector with every field present and zero.
    pub fn zeroed() -> Self {
        let mut info = Self::default();
        for nutrient in Nutrient::ALL {
            *info.slot_mut(nutrient) = Some(0.0);
        }
        info
    }
}
