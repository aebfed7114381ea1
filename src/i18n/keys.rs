//! Statically enumerated translation keys and the built-in catalog.
//!
//! Every key is declared once together with its string for each built-in
//! locale. Leaving out a locale for a key, or adding a [`Locale`] variant
//! without extending the catalog, fails to compile.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::Locale;

/// Declares [`TranslationKey`] and its built-in strings.
macro_rules! translation_keys {
    ($( $variant:ident => $key:literal { it: $it:literal, en: $en:literal $(,)? } ),* $(,)?) => {
        /// A translation key known at compile time.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TranslationKey {
            $( $variant, )*
        }

        impl TranslationKey {
            /// Every declared key, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )* ];

            /// Dotted identifier used in translation files (e.g. `home.hero.title1`).
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $key, )*
                }
            }

            /// Built-in string for `locale`.
            #[must_use]
            pub const fn builtin(self, locale: Locale) -> &'static str {
                match (self, locale) {
                    $(
                        (Self::$variant, Locale::It) => $it,
                        (Self::$variant, Locale::En) => $en,
                    )*
                }
            }
        }
    };
}

/// Dotted identifier to key index.
static KEY_INDEX: LazyLock<HashMap<&'static str, TranslationKey>> =
    LazyLock::new(|| TranslationKey::ALL.iter().map(|key| (key.as_str(), *key)).collect());

impl TranslationKey {
    /// Finds the key whose dotted identifier is `key`.
    #[must_use]
    pub fn lookup(key: &str) -> Option<Self> {
        KEY_INDEX.get(key).copied()
    }
}

impl std::fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

translation_keys! {
    // Navigation
    NavHome => "nav.home" { it: "Home", en: "Home" },
    NavAbout => "nav.about" { it: "Chi siamo", en: "About" },
    NavContact => "nav.contact" { it: "Contatti", en: "Contact" },
    NavProducts => "nav.products" { it: "Prodotti", en: "Products" },
    NavCta => "nav.cta" { it: "Richiedi una demo", en: "Request a demo" },

    // Home
    HomeHeroTitle1 => "home.hero.title1" {
        it: "Software che lavora",
        en: "Software that works",
    },
    HomeHeroTitle2 => "home.hero.title2" {
        it: "per le persone",
        en: "for people",
    },
    HomeHeroDesc => "home.hero.desc" {
        it: "ANTHERA Systems progetta piattaforme SaaS per la gestione dei team e la governance dell'intelligenza artificiale, pensate per le aziende europee.",
        en: "ANTHERA Systems builds SaaS platforms for team management and AI governance, designed for European companies.",
    },
    HomeHeroCta1 => "home.hero.cta1" { it: "Scopri PowerLeave", en: "Discover PowerLeave" },
    HomeHeroCta2 => "home.hero.cta2" { it: "Scopri GOVERN.AI", en: "Discover GOVERN.AI" },
    HomeHeroBadge1 => "home.hero.badge1" { it: "Sviluppato in Italia", en: "Built in Italy" },
    HomeHeroBadge2 => "home.hero.badge2" { it: "Conforme al GDPR", en: "GDPR compliant" },
    HomeHeroBadge3 => "home.hero.badge3" { it: "Sicurezza by design", en: "Secure by design" },
    HomeWhyTitle => "home.why.title" { it: "Perché scegliere", en: "Why choose" },
    HomeWhyDesc => "home.why.desc" {
        it: "Tecnologia solida, trasparente e costruita attorno alle esigenze reali delle organizzazioni.",
        en: "Solid, transparent technology built around the real needs of organizations.",
    },
    HomeWhyCard1Title => "home.why.card1.title" { it: "Sicurezza", en: "Security" },
    HomeWhyCard1Desc => "home.why.card1.desc" {
        it: "Autenticazione robusta, ruoli granulari e dati ospitati in Europa.",
        en: "Strong authentication, fine-grained roles and data hosted in Europe.",
    },
    HomeWhyCard2Title => "home.why.card2.title" { it: "Velocità", en: "Speed" },
    HomeWhyCard2Desc => "home.why.card2.desc" {
        it: "Attivazione in pochi minuti, senza installazioni né configurazioni complesse.",
        en: "Up and running in minutes, with no installs or complex setup.",
    },
    HomeWhyCard3Title => "home.why.card3.title" { it: "Conformità", en: "Compliance" },
    HomeWhyCard3Desc => "home.why.card3.desc" {
        it: "Processi allineati a GDPR, AI Act e ai principali standard internazionali.",
        en: "Processes aligned with GDPR, the AI Act and leading international standards.",
    },
    HomeWhyCard4Title => "home.why.card4.title" { it: "Persone al centro", en: "People first" },
    HomeWhyCard4Desc => "home.why.card4.desc" {
        it: "Interfacce chiare, pensate per chi le usa ogni giorno.",
        en: "Clear interfaces designed for the people who use them every day.",
    },
    HomeProductsTitle => "home.products.title" { it: "I nostri prodotti", en: "Our products" },
    HomeProductsDesc => "home.products.desc" {
        it: "Due piattaforme, un unico obiettivo: semplificare il lavoro delle organizzazioni.",
        en: "Two platforms, one goal: making organizations work better.",
    },
    HomeProductsPlTag => "home.products.pl.tag" { it: "HR & TEAM", en: "HR & TEAM" },
    HomeProductsPlName => "home.products.pl.name" { it: "PowerLeave", en: "PowerLeave" },
    HomeProductsPlDesc => "home.products.pl.desc" {
        it: "Ferie, permessi, presenze e turni in un'unica piattaforma per team di ogni dimensione.",
        en: "Leave, time off, attendance and shifts in a single platform for teams of any size.",
    },
    HomeProductsPlCta => "home.products.pl.cta" { it: "Scopri di più", en: "Learn more" },
    HomeProductsGovTag => "home.products.gov.tag" { it: "AI GOVERNANCE", en: "AI GOVERNANCE" },
    HomeProductsGovName => "home.products.gov.name" { it: "GOVERN.AI", en: "GOVERN.AI" },
    HomeProductsGovDesc => "home.products.gov.desc" {
        it: "Inventario, valutazione del rischio e documentazione dei sistemi di IA secondo l'AI Act europeo.",
        en: "Inventory, risk assessment and documentation of AI systems under the European AI Act.",
    },
    HomeProductsGovCta => "home.products.gov.cta" { it: "Scopri di più", en: "Learn more" },
    HomeStatsTitle => "home.stats.title" { it: "I numeri di", en: "The numbers behind" },
    HomeStatsTitle2 => "home.stats.title2" { it: "ANTHERA", en: "ANTHERA" },
    HomeStatsStat1 => "home.stats.stat1" { it: "Endpoint API", en: "API endpoints" },
    HomeStatsStat2 => "home.stats.stat2" { it: "Test API superati", en: "API tests passing" },
    HomeStatsStat3 => "home.stats.stat3" { it: "Standard supportati", en: "Standards supported" },
    HomeCtaTitle1 => "home.cta.title1" { it: "Pronto a iniziare?", en: "Ready to get started?" },
    HomeCtaTitle2 => "home.cta.title2" { it: "Parliamone.", en: "Let's talk." },
    HomeCtaDesc => "home.cta.desc" {
        it: "Raccontaci le esigenze della tua organizzazione: ti mostreremo come possiamo aiutarti.",
        en: "Tell us what your organization needs and we will show you how we can help.",
    },
    HomeCtaButton => "home.cta.button" { it: "Contattaci", en: "Contact us" },

    // PowerLeave
    PlHeroTitle1 => "pl.hero.title1" { it: "Gestisci ferie e team", en: "Manage leave and teams" },
    PlHeroTitle2 => "pl.hero.title2" { it: "senza fogli di calcolo", en: "without spreadsheets" },
    PlHeroTitle3 => "pl.hero.title3" { it: "con PowerLeave", en: "with PowerLeave" },
    PlHeroDesc => "pl.hero.desc" {
        it: "Richieste, approvazioni, calendari condivisi e report in tempo reale per HR e responsabili.",
        en: "Requests, approvals, shared calendars and real-time reports for HR and managers.",
    },
    PlHeroCta1 => "pl.hero.cta1" { it: "Richiedi accesso anticipato", en: "Request early access" },
    PlHeroCta2 => "pl.hero.cta2" { it: "Vedi le funzionalità", en: "See features" },
    PlFeaturesTitle => "pl.features.title" { it: "Tutto ciò che serve", en: "Everything you need" },
    PlFeaturesTitle2 => "pl.features.title2" { it: "per il tuo team", en: "for your team" },
    PlF1Title => "pl.f1.title" { it: "Calendario condiviso", en: "Shared calendar" },
    PlF1Desc => "pl.f1.desc" {
        it: "Assenze e disponibilità di tutto il team in un colpo d'occhio.",
        en: "Absences and availability for the whole team at a glance.",
    },
    PlF2Title => "pl.f2.title" { it: "Multi-sede", en: "Multi-site" },
    PlF2Desc => "pl.f2.desc" {
        it: "Gestisci più sedi, reparti e calendari festivi da un unico pannello.",
        en: "Manage multiple sites, departments and holiday calendars from one dashboard.",
    },
    PlF3Title => "pl.f3.title" { it: "Ruoli e approvazioni", en: "Roles and approvals" },
    PlF3Desc => "pl.f3.desc" {
        it: "Flussi di approvazione configurabili per dipendenti, responsabili e HR.",
        en: "Configurable approval flows for employees, managers and HR.",
    },
    PlF4Title => "pl.f4.title" { it: "Report e analisi", en: "Reports and analytics" },
    PlF4Desc => "pl.f4.desc" {
        it: "Saldi, trend e esportazioni pronte per la paghe.",
        en: "Balances, trends and payroll-ready exports.",
    },
    PlF5Title => "pl.f5.title" { it: "Sicurezza dei dati", en: "Data security" },
    PlF5Desc => "pl.f5.desc" {
        it: "Autenticazione JWT, cifratura e dati ospitati nell'Unione Europea.",
        en: "JWT authentication, encryption and data hosted in the European Union.",
    },
    PlF6Title => "pl.f6.title" { it: "Integrazioni", en: "Integrations" },
    PlF6Desc => "pl.f6.desc" {
        it: "API aperte e automazioni per collegare i tuoi strumenti esistenti.",
        en: "Open APIs and automations to connect your existing tools.",
    },
    PlStackTitle => "pl.stack.title" { it: "Stack tecnologico", en: "Tech stack" },
    PlPricingTitle => "pl.pricing.title" { it: "Piani e prezzi", en: "Plans and pricing" },
    PlPricingDesc => "pl.pricing.desc" {
        it: "Prezzi in definizione: unisciti al programma di accesso anticipato.",
        en: "Pricing is being finalized: join the early access program.",
    },
    PlPricingStarter => "pl.pricing.starter" {
        it: "Per piccoli team che iniziano a organizzarsi.",
        en: "For small teams getting organized.",
    },
    PlPricingBusiness => "pl.pricing.business" {
        it: "Per aziende in crescita con più reparti.",
        en: "For growing companies with multiple departments.",
    },
    PlPricingEnterprise => "pl.pricing.enterprise" {
        it: "Per grandi organizzazioni con esigenze su misura.",
        en: "For large organizations with tailored requirements.",
    },
    PlPricingTbd => "pl.pricing.tbd" { it: "Da definire", en: "TBD" },
    PlPricingContact => "pl.pricing.contact" { it: "Contattaci", en: "Contact us" },
    PlPricingJoin => "pl.pricing.join" { it: "Unisciti alla lista", en: "Join the waitlist" },
    PlPricingRecommended => "pl.pricing.recommended" { it: "Consigliato", en: "Recommended" },
    PlPricingEarlyaccess => "pl.pricing.earlyaccess" {
        it: "I primi clienti avranno condizioni riservate.",
        en: "Early customers get reserved terms.",
    },

    // GOVERN.AI
    GovHeroTitle1 => "gov.hero.title1" { it: "Governa l'intelligenza artificiale", en: "Govern artificial intelligence" },
    GovHeroTitle2 => "gov.hero.title2" { it: "con fiducia", en: "with confidence" },
    GovHeroDesc => "gov.hero.desc" {
        it: "GOVERN.AI censisce i sistemi di IA, ne valuta il rischio e genera la documentazione richiesta dall'AI Act.",
        en: "GOVERN.AI inventories AI systems, assesses their risk and produces the documentation the AI Act requires.",
    },
    GovHeroCta1 => "gov.hero.cta1" { it: "Richiedi una demo", en: "Request a demo" },
    GovHeroCta2 => "gov.hero.cta2" { it: "Documentazione", en: "Documentation" },
    GovDocsToast => "gov.docs.toast" {
        it: "La documentazione sarà disponibile a breve.",
        en: "Documentation is coming soon.",
    },
    GovFeaturesTitle1 => "gov.features.title1" { it: "Una piattaforma", en: "One platform" },
    GovFeaturesTitle2 => "gov.features.title2" { it: "completa", en: "complete" },
    GovFeaturesTitle3 => "gov.features.title3" { it: "per la compliance IA", en: "for AI compliance" },
    GovF1Title => "gov.f1.title" { it: "Registro dei sistemi IA", en: "AI system registry" },
    GovF1Desc => "gov.f1.desc" {
        it: "Un inventario centralizzato di modelli, fornitori e casi d'uso.",
        en: "A central inventory of models, vendors and use cases.",
    },
    GovF2Title => "gov.f2.title" { it: "Valutazione del rischio", en: "Risk assessment" },
    GovF2Desc => "gov.f2.desc" {
        it: "Classificazione guidata secondo le categorie di rischio dell'AI Act.",
        en: "Guided classification against the AI Act risk categories.",
    },
    GovF3Title => "gov.f3.title" { it: "Documentazione automatica", en: "Automated documentation" },
    GovF3Desc => "gov.f3.desc" {
        it: "Schede tecniche e registri generati a partire dai dati raccolti.",
        en: "Technical files and records generated from collected data.",
    },
    GovF4Title => "gov.f4.title" { it: "Controlli e checklist", en: "Controls and checklists" },
    GovF4Desc => "gov.f4.desc" {
        it: "Piani d'azione tracciati per ogni requisito normativo.",
        en: "Tracked action plans for every regulatory requirement.",
    },
    GovF5Title => "gov.f5.title" { it: "Assistente IA", en: "AI assistant" },
    GovF5Desc => "gov.f5.desc" {
        it: "Risposte contestuali sulle normative direttamente nella piattaforma.",
        en: "Contextual answers about regulations right inside the platform.",
    },
    GovF6Title => "gov.f6.title" { it: "Architettura europea", en: "European architecture" },
    GovF6Desc => "gov.f6.desc" {
        it: "Dati e infrastruttura progettati per restare nell'Unione Europea.",
        en: "Data and infrastructure designed to stay in the European Union.",
    },
    GovStandardsTitle1 => "gov.standards.title1" { it: "Standard e", en: "Standards and" },
    GovStandardsTitle2 => "gov.standards.title2" { it: "normative", en: "regulations" },
    GovStd1Name => "gov.std1.name" { it: "AI Act UE", en: "EU AI Act" },
    GovStd1Desc => "gov.std1.desc" {
        it: "Il regolamento europeo sull'intelligenza artificiale.",
        en: "The European regulation on artificial intelligence.",
    },
    GovStd2Name => "gov.std2.name" { it: "GDPR", en: "GDPR" },
    GovStd2Desc => "gov.std2.desc" {
        it: "Protezione dei dati personali trattati dai sistemi di IA.",
        en: "Protection of personal data processed by AI systems.",
    },
    GovStd3Name => "gov.std3.name" { it: "ISO/IEC 42001", en: "ISO/IEC 42001" },
    GovStd3Desc => "gov.std3.desc" {
        it: "Sistema di gestione per l'intelligenza artificiale.",
        en: "Management system for artificial intelligence.",
    },
    GovStd4Name => "gov.std4.name" { it: "ISO/IEC 27001", en: "ISO/IEC 27001" },
    GovStd4Desc => "gov.std4.desc" {
        it: "Sicurezza delle informazioni.",
        en: "Information security management.",
    },
    GovStd5Name => "gov.std5.name" { it: "NIST AI RMF", en: "NIST AI RMF" },
    GovStd5Desc => "gov.std5.desc" {
        it: "Framework di gestione del rischio per l'IA.",
        en: "Risk management framework for AI.",
    },
    GovStd6Name => "gov.std6.name" { it: "NIS2", en: "NIS2" },
    GovStd6Desc => "gov.std6.desc" {
        it: "Sicurezza delle reti e dei sistemi informativi.",
        en: "Security of network and information systems.",
    },
    GovStackTitle => "gov.stack.title" { it: "Stack tecnologico", en: "Tech stack" },
    GovPricingTitle => "gov.pricing.title" { it: "Piani e prezzi", en: "Plans and pricing" },
    GovPricingDesc => "gov.pricing.desc" {
        it: "Scegli il piano adatto al numero di sistemi IA che gestisci.",
        en: "Choose the plan that fits the number of AI systems you manage.",
    },
    GovPricingPro => "gov.pricing.pro" {
        it: "Per professionisti e piccoli studi.",
        en: "For consultants and small firms.",
    },
    GovPricingBusiness => "gov.pricing.business" {
        it: "Per aziende con più sistemi IA in produzione.",
        en: "For companies running several AI systems in production.",
    },
    GovPricingEnterprise => "gov.pricing.enterprise" {
        it: "Per gruppi e organizzazioni regolamentate.",
        en: "For groups and regulated organizations.",
    },
    GovPricingStart => "gov.pricing.start" { it: "Inizia ora", en: "Get started" },

    // About
    AboutHeroTitle1 => "about.hero.title1" { it: "Costruiamo software", en: "We build software" },
    AboutHeroTitle2 => "about.hero.title2" { it: "che fa la differenza", en: "that makes a difference" },
    AboutHeroDesc => "about.hero.desc" {
        it: "ANTHERA Systems è una software house italiana che sviluppa prodotti SaaS per le organizzazioni europee.",
        en: "ANTHERA Systems is an Italian software company building SaaS products for European organizations.",
    },
    AboutMissionTitle => "about.mission.title" { it: "La nostra", en: "Our" },
    AboutMissionTitle2 => "about.mission.title2" { it: "missione", en: "mission" },
    AboutMissionText => "about.mission.text" {
        it: "Rendere la tecnologia un alleato affidabile, trasparente e conforme per chi lavora ogni giorno.",
        en: "Making technology a reliable, transparent and compliant ally for the people who work with it every day.",
    },
    AboutValuesTitle => "about.values.title" { it: "I nostri valori", en: "Our values" },
    AboutV1Title => "about.v1.title" { it: "Trasparenza", en: "Transparency" },
    AboutV1Desc => "about.v1.desc" {
        it: "Comunichiamo in modo chiaro cosa fanno i nostri prodotti e come trattano i dati.",
        en: "We are clear about what our products do and how they handle data.",
    },
    AboutV2Title => "about.v2.title" { it: "Qualità", en: "Quality" },
    AboutV2Desc => "about.v2.desc" {
        it: "Test automatici e revisioni continue in ogni rilascio.",
        en: "Automated tests and continuous review in every release.",
    },
    AboutV3Title => "about.v3.title" { it: "Responsabilità", en: "Responsibility" },
    AboutV3Desc => "about.v3.desc" {
        it: "Un uso etico dell'intelligenza artificiale, fin dalla progettazione.",
        en: "Ethical use of artificial intelligence, from the design stage.",
    },
    AboutV4Title => "about.v4.title" { it: "Vicinanza", en: "Closeness" },
    AboutV4Desc => "about.v4.desc" {
        it: "Ascoltiamo i clienti e costruiamo insieme a loro.",
        en: "We listen to our customers and build together with them.",
    },
    AboutTeamTitle => "about.team.title" { it: "Il fondatore", en: "The founder" },
    AboutTeamRole => "about.team.role" { it: "Fondatore & CTO", en: "Founder & CTO" },

    // Contact
    ContactHeroTitle => "contact.hero.title" { it: "Parliamo del tuo progetto", en: "Let's talk about your project" },
    ContactHeroDesc => "contact.hero.desc" {
        it: "Compila il modulo e ti risponderemo al più presto.",
        en: "Fill in the form and we will get back to you shortly.",
    },
    ContactFormName => "contact.form.name" { it: "Nome", en: "Name" },
    ContactFormNamePh => "contact.form.name.ph" { it: "Il tuo nome", en: "Your name" },
    ContactFormEmail => "contact.form.email" { it: "Email", en: "Email" },
    ContactFormEmailPh => "contact.form.email.ph" { it: "nome@azienda.it", en: "name@company.com" },
    ContactFormCompany => "contact.form.company" { it: "Azienda", en: "Company" },
    ContactFormCompanyPh => "contact.form.company.ph" { it: "Nome dell'azienda", en: "Company name" },
    ContactFormInterest => "contact.form.interest" { it: "Interesse", en: "Interest" },
    ContactFormInterestPh => "contact.form.interest.ph" { it: "Seleziona un prodotto", en: "Select a product" },
    ContactFormInterestBoth => "contact.form.interest.both" { it: "Entrambi", en: "Both" },
    ContactFormInterestOther => "contact.form.interest.other" { it: "Altro", en: "Other" },
    ContactFormMessage => "contact.form.message" { it: "Messaggio", en: "Message" },
    ContactFormMessagePh => "contact.form.message.ph" {
        it: "Raccontaci di cosa hai bisogno",
        en: "Tell us what you need",
    },
    ContactFormSubmit => "contact.form.submit" { it: "Invia messaggio", en: "Send message" },
    ContactFormError => "contact.form.error" {
        it: "Compila nome, email e messaggio.",
        en: "Please fill in name, email and message.",
    },
    ContactFormToast => "contact.form.toast" { it: "Messaggio inviato!", en: "Message sent!" },
    ContactFormSuccessTitle => "contact.form.success.title" { it: "Grazie!", en: "Thank you!" },
    ContactFormSuccessDesc => "contact.form.success.desc" {
        it: "Abbiamo ricevuto il tuo messaggio e ti risponderemo entro 24 ore.",
        en: "We received your message and will reply within 24 hours.",
    },
    ContactFormSuccessAgain => "contact.form.success.again" { it: "Invia un altro messaggio", en: "Send another message" },
    ContactInfoEmail => "contact.info.email" { it: "Email", en: "Email" },
    ContactInfoLocation => "contact.info.location" { it: "Sede", en: "Location" },
    ContactInfoLocationVal => "contact.info.location.val" { it: "Italia", en: "Italy" },
    ContactInfoResponse => "contact.info.response" { it: "Tempi di risposta", en: "Response time" },
    ContactInfoResponseVal => "contact.info.response.val" { it: "Entro 24 ore", en: "Within 24 hours" },
    ContactInfoDirect => "contact.info.direct" { it: "Preferisci scriverci direttamente?", en: "Prefer to write to us directly?" },
    ContactInfoDirect2 => "contact.info.direct2" { it: "Siamo a una email di distanza.", en: "We are one email away." },

    // Footer
    FooterDesc => "footer.desc" { it: "Software SaaS per team e governance dell'IA.", en: "SaaS software for teams and AI governance." },
    FooterDesc2 => "footer.desc2" { it: "Progettato in Italia, per l'Europa.", en: "Designed in Italy, for Europe." },
    FooterBuilt => "footer.built" { it: "Costruito con cura", en: "Built with care" },
    FooterProducts => "footer.products" { it: "Prodotti", en: "Products" },
    FooterCompany => "footer.company" { it: "Azienda", en: "Company" },
    FooterAbout => "footer.about" { it: "Chi siamo", en: "About" },
    FooterContact => "footer.contact" { it: "Contatti", en: "Contact" },
    FooterLegal => "footer.legal" { it: "Tutti i diritti riservati.", en: "All rights reserved." },
}
