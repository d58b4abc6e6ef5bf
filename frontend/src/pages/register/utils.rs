use crate::pages::login::utils::is_valid_email;

pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    if username.trim().len() < 3 {
        return Err("Le nom d'utilisateur doit contenir au moins 3 caractères.".to_string());
    }
    if !is_valid_email(email) {
        return Err("Adresse email invalide.".to_string());
    }
    if password.len() < 8 {
        return Err("Le mot de passe doit contenir au moins 8 caractères.".to_string());
    }
    if password != confirm {
        return Err("Les mots de passe ne correspondent pas.".to_string());
    }
    Ok(())
}
