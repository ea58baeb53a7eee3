//! Swedish (`sv`) translations.
//!
//! Placeholder tokens such as `__PERCENTAGE__` and `__MAX__` are plain
//! substrings here; substitution happens in the consuming i18n layer.

use crate::catalog::TranslationCatalog;

/// Build the Swedish catalog.
pub(super) fn catalog() -> TranslationCatalog {
    let mut catalog = TranslationCatalog::new("sv");

    catalog.insert("close", "Stäng");
    catalog.insert("cancel", "Avbryt");
    catalog.insert("refresh", "Uppdatera");
    catalog.insert("trashItem", "Papperskorg");
    catalog.insert("moveItem", "Flytta");
    catalog.insert("myCloud", "Mitt Cloud");
    catalog.insert("loginTitle", "Logga in");
    catalog.insert("registerTitle", "Skapa Konto");
    catalog.insert("or", "eller");
    catalog.insert("loginButton", "Logga in");
    catalog.insert("registerButton", "Skapa Konto");
    catalog.insert("registerLink", "Skapa Konto (Första 10 GB gratis)");
    catalog.insert("loginLink", "Logga in");
    catalog.insert("passwordRepeatPlaceholder", "Upprepa lösenord");
    catalog.insert("emailPlaceholder", "E-postadress");
    catalog.insert("passwordPlaceholder", "Lösenord");
    catalog.insert("2faPlaceholder", "2FA kod (Fyll endast i om 2FA är aktiverat)");
    catalog.insert("loginInvalidInputs", "Fel E-postadress eller lösenord");
    catalog.insert("alertOkButton", "OK");
    catalog.insert("loginWrongCredentials", "Fel E-postadress, lösenord eller 2FA kod");
    catalog.insert("apiRequestError", "Request error, försök igen");
    catalog.insert("registerInvalidFields", "Ogiltliga formulärfält");
    catalog.insert("registerPasswordAtLeast10Chars", "Ditt lösenord måste vara längre än 10");
    catalog.insert("registerPasswordsDoNotMatch", "Lösenorden matchar inte");
    catalog.insert("registerInvalidEmail", "Ogiltlig E-postadress");
    catalog.insert("registerEmailAlreadyRegistered", "Denna E-postadress används redan");
    catalog.insert("registerCouldNotSendEmail", "OK");
    // Second write to `alertOkButton`: overwrites the "OK" above and is kept
    // that way to match the shipped strings.
    catalog.insert("alertOkButton", "Kunde ej skicka verifieringsmail, försök igen senare");
    catalog.insert(
        "registerSuccess",
        "Kontot skapades, vänligen verifiera ditt konto genom att klicka på länken som du fick \
         via epost",
    );
    catalog.insert("registerInvalidInputs", "Fel E-postadress, lösenord och upprepa lösenord");
    catalog.insert("sharedWithMe", "Delat med mig");
    catalog.insert("currentlySharing", "Delas av mig");
    catalog.insert("settings", "Inställningar");
    catalog.insert("encryption", "Kryptering");
    catalog.insert("help", "Hjälp");
    catalog.insert("trash", "Papperskorg");
    catalog.insert("userStorageUsageMenuText", "__PERCENTAGE__% av __MAX__ använt");
    catalog.insert("goProBadge", "Gå Pro");
    catalog.insert(
        "unknownDeviceError",
        "Ett okänt fel inträffade, starta om applikationen eller kontakta support",
    );

    catalog
}
