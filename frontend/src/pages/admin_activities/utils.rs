use crate::api::CreateActivityRequest;

pub const CATEGORY_OPTIONS: &[&str] = &[
    "yoga",
    "escalade",
    "running",
    "natation",
    "pilates",
    "musculation",
];

pub const LEVEL_OPTIONS: &[&str] = &["Tous niveaux", "débutant", "intermédiaire", "avancé"];

/// Raw form state; everything is a string until submission.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityForm {
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub max_participants: String,
    pub price: String,
    pub level: String,
    pub sport_zen: bool,
    pub image: String,
    pub instructor: String,
}

impl Default for ActivityForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: "yoga".to_string(),
            location: String::new(),
            date: String::new(),
            time: String::new(),
            duration: "1h".to_string(),
            max_participants: "20".to_string(),
            price: "Gratuit".to_string(),
            level: "Tous niveaux".to_string(),
            sport_zen: false,
            image: String::new(),
            instructor: String::new(),
        }
    }
}

impl ActivityForm {
    pub fn to_request(&self) -> Result<CreateActivityRequest, String> {
        if self.name.trim().is_empty() {
            return Err("Le nom est obligatoire.".to_string());
        }
        if self.location.trim().is_empty() {
            return Err("Le lieu est obligatoire.".to_string());
        }
        let date = self
            .date
            .parse()
            .map_err(|_| "La date est invalide.".to_string())?;
        if self.time.trim().is_empty() {
            return Err("L'heure est obligatoire.".to_string());
        }
        let max_participants: i32 = self
            .max_participants
            .trim()
            .parse()
            .map_err(|_| "Le nombre de participants est invalide.".to_string())?;
        if max_participants <= 0 {
            return Err("Le nombre de participants doit être positif.".to_string());
        }

        Ok(CreateActivityRequest {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.clone(),
            location: self.location.trim().to_string(),
            date,
            time: self.time.clone(),
            duration: self.duration.clone(),
            max_participants,
            price: self.price.clone(),
            level: self.level.clone(),
            sport_zen: self.sport_zen,
            image: self.image.trim().to_string(),
            instructor: self.instructor.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ActivityForm {
        ActivityForm {
            name: "Escalade bloc".into(),
            location: "Villeurbanne".into(),
            date: "2026-05-01".into(),
            time: "18:30".into(),
            ..Default::default()
        }
    }

    #[test]
    fn filled_form_converts_to_request() {
        let request = filled_form().to_request().unwrap();
        assert_eq!(request.name, "Escalade bloc");
        assert_eq!(request.max_participants, 20);
        assert_eq!(request.date.to_string(), "2026-05-01");
        assert_eq!(request.level, "Tous niveaux");
    }

    #[test]
    fn empty_form_is_rejected() {
        assert!(ActivityForm::default().to_request().is_err());
    }

    #[test]
    fn bad_date_and_participants_are_rejected() {
        let mut form = filled_form();
        form.date = "01/05/2026".into();
        assert!(form.to_request().is_err());

        let mut form = filled_form();
        form.max_participants = "beaucoup".into();
        assert!(form.to_request().is_err());

        let mut form = filled_form();
        form.max_participants = "0".into();
        assert!(form.to_request().is_err());
    }
}
