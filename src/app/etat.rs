//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la session (entrée, résultat, lectures, erreur, digits, démarche)
//! et offrir des opérations simples (C/CLR/AC, fin de session) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Une erreur ne termine jamais la session : on garde le dernier résultat.

/// Décimales de la lecture fixe par défaut.
const DIGITS_DEFAUT: usize = 10;

/// Au-delà, un f64 n’a plus de chiffres significatifs à montrer.
const DIGITS_MAX: usize = 17;

/// Mots qui terminent la session (après trim, casse exacte).
pub const MOTS_ARRET: [&str; 2] = ["quit", "exit"];

pub fn est_mot_arret(entree: &str) -> bool {
    MOTS_ARRET.contains(&entree.trim())
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub etapes: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,         // décimal le plus court (se relit à l’identique)
    pub lecture: String,          // décimales fixes (digits)
    pub fraction: Option<String>, // p/q si une petite fraction existe
    pub erreur: String,           // message d’erreur (si tokenisation/réduction échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub digits: usize,

    // --- session ---
    pub session_terminee: bool,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            lecture: String::new(),
            fraction: None,
            erreur: String::new(),
            demarche: Demarche::default(),
            digits: DIGITS_DEFAUT,
            session_terminee: false,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + digits par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.digits = DIGITS_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    fn clear_demarche(&mut self) {
        self.demarche = Demarche::default();
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.lecture.clear();
        self.fraction = None;
        self.erreur.clear();
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - On coupe la démarche (elle décrirait une évaluation qui n’a pas abouti).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet.
    pub fn set_resultats(
        &mut self,
        resultat: impl Into<String>,
        lecture: impl Into<String>,
        fraction: Option<String>,
        demarche: Demarche,
    ) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.lecture = lecture.into();
        self.fraction = fraction;
        self.demarche = demarche;
        self.session_terminee = false;
        self.focus_entree = true;
    }

    /// quit / exit : tout effacer et marquer la session comme terminée.
    /// (natif : app.rs ferme la fenêtre ; web : la vue affiche un message)
    pub fn terminer_session(&mut self) {
        self.reset_total();
        self.session_terminee = true;
    }

    /// Garde-fou : limite digits.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.clamp(0, DIGITS_MAX);
        self.focus_entree = true;
    }
}
