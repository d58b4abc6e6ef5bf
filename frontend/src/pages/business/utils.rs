use crate::api::{Plan, SubscriptionRequest};
use crate::pages::login::utils::is_valid_email;

/// Plans shown when the `/plans/` endpoint is unreachable; mirrors the
/// commercial offer so the page stays useful offline.
pub fn fallback_plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "basic".into(),
            name: "Abonnement de base".into(),
            price: "40€".into(),
            billing_period: "mois".into(),
        },
        Plan {
            id: "intermediate".into(),
            name: "Abonnement intermédiaire".into(),
            price: "25€".into(),
            billing_period: "mois".into(),
        },
        Plan {
            id: "enterprise".into(),
            name: "Abonnement sur mesure".into(),
            price: "60€".into(),
            billing_period: "mois".into(),
        },
    ]
}

/// Maps a display name back to the plan key expected by the API.
pub fn plan_key_from_name(name: &str) -> &'static str {
    match name {
        "Abonnement de base" => "basic",
        "Abonnement intermédiaire" => "intermediate",
        "Abonnement sur mesure" => "enterprise",
        _ => "basic",
    }
}

pub fn validate_subscription(request: &SubscriptionRequest) -> Result<(), String> {
    if request.company_name.trim().is_empty() {
        return Err("Le nom de l'entreprise est obligatoire.".to_string());
    }
    if request.admin_name.trim().is_empty() {
        return Err("Le nom du contact est obligatoire.".to_string());
    }
    if !is_valid_email(&request.email) {
        return Err("Adresse email invalide.".to_string());
    }
    let digits = request.phone.chars().filter(char::is_ascii_digit).count();
    if digits < 10 {
        return Err("Numéro de téléphone invalide.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SubscriptionRequest {
        SubscriptionRequest {
            plan: "basic".into(),
            company_name: "Acme".into(),
            admin_name: "Jeanne".into(),
            email: "jeanne@acme.fr".into(),
            phone: "06 01 02 03 04".into(),
            message: String::new(),
        }
    }

    #[test]
    fn plan_keys_map_known_names_and_default_to_basic() {
        assert_eq!(plan_key_from_name("Abonnement de base"), "basic");
        assert_eq!(plan_key_from_name("Abonnement intermédiaire"), "intermediate");
        assert_eq!(plan_key_from_name("Abonnement sur mesure"), "enterprise");
        assert_eq!(plan_key_from_name("inconnu"), "basic");
    }

    #[test]
    fn fallback_plans_cover_the_three_offers() {
        let plans = fallback_plans();
        assert_eq!(plans.len(), 3);
        assert!(plans.iter().any(|p| p.id == "enterprise"));
    }

    #[test]
    fn valid_subscription_passes() {
        assert!(validate_subscription(&request()).is_ok());
    }

    #[test]
    fn subscription_requires_company_contact_and_reachable_details() {
        let mut r = request();
        r.company_name = "  ".into();
        assert!(validate_subscription(&r).is_err());

        let mut r = request();
        r.email = "jeanne".into();
        assert!(validate_subscription(&r).is_err());

        let mut r = request();
        r.phone = "0601".into();
        assert!(validate_subscription(&r).is_err());
    }
}
