pub mod card;
pub mod prediction_form;
pub mod scatter;
