pub mod plan_card;
pub mod signup_form;
