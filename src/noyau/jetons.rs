// src/noyau/jetons.rs

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurCalc;

/// Les quatre opérations de l’accumulateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// a op b, en flottant IEEE (÷0 => ±inf ou NaN, jamais d’erreur).
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => a / b,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }
}

/// Un jeton = une pression de bouton (ou une touche clavier équivalente).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jeton {
    /// '0'..='9'
    Chiffre(char),
    Point,
    OuvrePar,
    FermePar,
    Operateur(Operateur),
    Egal,
    /// "C"
    Efface,
    /// "<-"
    Retour,
}

impl Jeton {
    /// Caractère ajouté à l’affichage (saisie littérale), si le jeton en produit un.
    pub fn caractere(self) -> Option<char> {
        match self {
            Jeton::Chiffre(c) => Some(c),
            Jeton::Point => Some('.'),
            Jeton::OuvrePar => Some('('),
            Jeton::FermePar => Some(')'),
            _ => None,
        }
    }
}

impl FromStr for Jeton {
    type Err = ErreurCalc;

    /// Libellés du pavé + alias clavier ("*", "/", "−").
    fn from_str(libelle: &str) -> Result<Self, Self::Err> {
        let jeton = match libelle {
            "C" => Jeton::Efface,
            "<-" => Jeton::Retour,
            "(" => Jeton::OuvrePar,
            ")" => Jeton::FermePar,
            "." => Jeton::Point,
            "=" => Jeton::Egal,
            "+" => Jeton::Operateur(Operateur::Plus),
            "-" | "−" => Jeton::Operateur(Operateur::Moins),
            "×" | "*" => Jeton::Operateur(Operateur::Fois),
            "÷" | "/" => Jeton::Operateur(Operateur::Divise),
            _ => {
                let mut it = libelle.chars();
                match (it.next(), it.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Jeton::Chiffre(c),
                    _ => {
                        return Err(ErreurCalc::LibelleInconnu {
                            libelle: libelle.to_string(),
                        })
                    }
                }
            }
        };
        Ok(jeton)
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Chiffre(c) => write!(f, "{c}"),
            Jeton::Point => f.write_str("."),
            Jeton::OuvrePar => f.write_str("("),
            Jeton::FermePar => f.write_str(")"),
            Jeton::Operateur(op) => f.write_str(op.symbole()),
            Jeton::Egal => f.write_str("="),
            Jeton::Efface => f.write_str("C"),
            Jeton::Retour => f.write_str("<-"),
        }
    }
}
