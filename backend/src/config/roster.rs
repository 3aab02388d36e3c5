/// Members inserted on first start so the wheel is usable out of the box.
/// Everyone starts absent.
pub fn default_roster() -> Vec<&'static str> {
    vec![
        "Jean-Pierre Dupont",
        "Marie-Claire Martin",
        "François Leblanc",
        "Sophie Bernard",
        "Michel Moreau",
        "Isabelle Petit",
        "Philippe Durand",
        "Catherine Leroy",
        "Alain Robert",
        "Nathalie Simon",
        "Thierry Laurent",
        "Valérie Morel",
        "Pascal Roux",
        "Sandrine David",
        "Laurent Bertrand",
        "Céline Girard",
        "Patrick Bonnet",
        "Aurélie Dupuis",
        "Nicolas Fontaine",
        "Émilie Rousseau",
        "Stéphane Vincent",
        "Caroline Chevalier",
        "Jérôme Blanchard",
        "Delphine Gauthier",
        "Christophe Garcia",
        "Laure Martinez",
        "Frédéric Nguyen",
        "Sylvie Mercier",
        "Antoine Lefebvre",
        "Julie Perrin",
    ]
}
