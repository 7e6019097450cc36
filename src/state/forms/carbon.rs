//! The carbon footprint calculator form

use super::field::FormField;
use super::form_state::Form;

pub const FORM_ID: &str = "carbonForm";

pub const TRANSPORT: &str = "Transport";
pub const DIET: &str = "Diet";
pub const VEHICLE_DISTANCE: &str = "Vehicle Monthly Distance Km";
pub const AIR_TRAVEL: &str = "Frequency of Traveling by Air";

/// Build the calculator form with every question the estimator page asks
pub fn carbon_calculator() -> Form {
    let select = |id: &str, options: &[&str]| FormField::select(id, options).required();
    let number = |id: &str, min: f64, max: f64| FormField::number(id, min, max).required();

    Form::new(FORM_ID)
        .with_labeled(
            "Body Type",
            "Body Type",
            vec![select(
                "Body Type",
                &["underweight", "normal", "overweight", "obese"],
            )],
        )
        .with_labeled("Sex", "Sex", vec![select("Sex", &["male", "female"])])
        .with_labeled(
            "Diet",
            DIET,
            vec![select(
                DIET,
                &["vegan", "vegetarian", "pescatarian", "omnivore"],
            )],
        )
        .with_labeled(
            "How Often Shower",
            "How Often Shower",
            vec![select(
                "How Often Shower",
                &["less frequently", "daily", "more frequently", "twice a day"],
            )],
        )
        .with_labeled(
            "Heating Energy Source",
            "Heating Energy Source",
            vec![select(
                "Heating Energy Source",
                &["coal", "wood", "natural gas", "electricity"],
            )],
        )
        .with_labeled(
            "Transport",
            TRANSPORT,
            vec![select(TRANSPORT, &["public", "private", "walk/bicycle"])],
        )
        .with_labeled(
            "Vehicle Type",
            "Vehicle Type",
            vec![FormField::select(
                "Vehicle Type",
                &["none", "petrol", "diesel", "lpg", "hybrid", "electric"],
            )],
        )
        .with_labeled(
            "Social Activity",
            "Social Activity",
            vec![select("Social Activity", &["never", "sometimes", "often"])],
        )
        .with_labeled(
            "Monthly Grocery Bill ($)",
            "Monthly Grocery Bill",
            vec![number("Monthly Grocery Bill", 50.0, 300.0)],
        )
        .with_labeled(
            "Air Travel Frequency",
            AIR_TRAVEL,
            vec![select(
                AIR_TRAVEL,
                &["never", "rarely", "frequently", "very frequently"],
            )],
        )
        .with_labeled(
            "Vehicle Monthly Distance (km)",
            VEHICLE_DISTANCE,
            vec![number(VEHICLE_DISTANCE, 0.0, 10000.0)],
        )
        .with_labeled(
            "Waste Bag Size",
            "Waste Bag Size",
            vec![select(
                "Waste Bag Size",
                &["small", "medium", "large", "extra large"],
            )],
        )
        .with_labeled(
            "Waste Bags per Week",
            "Waste Bag Weekly Count",
            vec![number("Waste Bag Weekly Count", 1.0, 7.0)],
        )
        .with_labeled(
            "TV/PC Hours per Day",
            "How Long TV PC Daily Hour",
            vec![number("How Long TV PC Daily Hour", 0.0, 24.0)],
        )
        .with_labeled(
            "New Clothes per Month",
            "How Many New Clothes Monthly",
            vec![number("How Many New Clothes Monthly", 0.0, 50.0)],
        )
        .with_labeled(
            "Internet Hours per Day",
            "How Long Internet Daily Hour",
            vec![number("How Long Internet Daily Hour", 0.0, 24.0)],
        )
        .with_labeled(
            "Energy efficiency",
            "Energy efficiency",
            ["No", "Sometimes", "Yes"]
                .iter()
                .map(|v| FormField::radio("Energy efficiency", v))
                .collect(),
        )
        .with_labeled(
            "Recycling",
            "Recycling",
            ["Paper", "Plastic", "Glass", "Metal"]
                .iter()
                .map(|v| FormField::checkbox("Recycling", v))
                .collect(),
        )
        .with_labeled(
            "Cooking With",
            "Cooking_With",
            ["Stove", "Oven", "Microwave", "Grill", "Airfryer"]
                .iter()
                .map(|v| FormField::checkbox("Cooking_With", v))
                .collect(),
        )
        .with_estimate_display()
}
