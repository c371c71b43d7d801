//! Embedded label tables (PT / EN / FR)

use super::labels::LabelKey::{self, *};

pub(super) static PT_LABELS: &[(LabelKey, &str)] = &[
    (Title, "🌽 Smart Maize"),
    (Subtitle, "Assistente Profissional de Produção de Milho"),
    (LanguageSelector, "🌐 Idioma"),
    (Footer, "Desenvolvido por Pascoal Barros in Frondosa Agronomic"),
    (RainfallInput, "Chuva prevista (mm)"),
    (TemperatureInput, "Temperatura média (°C)"),
    (SoilInput, "Tipo de solo"),
    (DaysInput, "Dias desde o plantio"),
    (AnalyzeButton, "Analisar cenário agrícola"),
    (SoilLoam, "Franco"),
    (SoilClay, "Argiloso"),
    (SoilSandy, "Arenoso"),
    (DecisionHeading, "Decisão de Plantio"),
    (CropPhaseHeading, "Fase da Cultura"),
    (PestsHeading, "Pragas"),
    (WaterHeading, "Água / Irrigação"),
    (ProductivityHeading, "Produtividade"),
    (CanPlant, "Pode plantar 🌱"),
    (SoilLimiting, "Clima favorável, mas solo limitante ⚠️"),
    (DoNotPlant, "Não recomendado plantar ❌"),
    (PhaseEmergence, "Emergência 🌱"),
    (PhaseVegetativeGrowth, "Crescimento vegetativo 🌿"),
    (PhaseFlowering, "Florescimento 🌼"),
    (PhaseFillingAndMaturity, "Enchimento e maturação 🌽"),
    (PestRisk, "Risco elevado de lagarta-do-cartucho 🐛"),
    (PestOk, "Sem risco significativo de pragas ✅"),
    (WaterHigh, "Necessidade elevada de água 💧"),
    (WaterOk, "Disponibilidade de água adequada 💦"),
    (ProductivityHigh, "Produtividade alta 🚀"),
    (ProductivityMedium, "Produtividade média ⚡"),
    (ProductivityLow, "Produtividade baixa 🛑"),
    (SeverityGood, "Favorável"),
    (SeverityWarning, "Atenção"),
    (SeverityBad, "Desfavorável"),
];

pub(super) static EN_LABELS: &[(LabelKey, &str)] = &[
    (Title, "🌽 Smart Maize"),
    (Subtitle, "Professional Corn Production Assistant"),
    (LanguageSelector, "🌐 Language"),
    (Footer, "Developed by Pascoal Barros at Frondosa Agronomic"),
    (RainfallInput, "Expected Rainfall (mm)"),
    (TemperatureInput, "Average Temperature (°C)"),
    (SoilInput, "Soil Type"),
    (DaysInput, "Days Since Planting"),
    (AnalyzeButton, "Analyze Agricultural Scenario"),
    (SoilLoam, "Loam"),
    (SoilClay, "Clay"),
    (SoilSandy, "Sandy"),
    (DecisionHeading, "Planting Decision"),
    (CropPhaseHeading, "Crop Phase"),
    (PestsHeading, "Pests"),
    (WaterHeading, "Water / Irrigation"),
    (ProductivityHeading, "Productivity"),
    (CanPlant, "Can Plant 🌱"),
    (SoilLimiting, "Favorable climate, but limiting soil ⚠️"),
    (DoNotPlant, "Do Not Plant ❌"),
    (PhaseEmergence, "Emergence 🌱"),
    (PhaseVegetativeGrowth, "Vegetative Growth 🌿"),
    (PhaseFlowering, "Flowering 🌼"),
    (PhaseFillingAndMaturity, "Filling and Maturity 🌽"),
    (PestRisk, "High risk of corn borer 🐛"),
    (PestOk, "No significant pest risk ✅"),
    (WaterHigh, "High water requirement 💧"),
    (WaterOk, "Adequate water availability 💦"),
    (ProductivityHigh, "High Productivity 🚀"),
    (ProductivityMedium, "Medium Productivity ⚡"),
    (ProductivityLow, "Low Productivity 🛑"),
    (SeverityGood, "Favorable"),
    (SeverityWarning, "Caution"),
    (SeverityBad, "Unfavorable"),
];

pub(super) static FR_LABELS: &[(LabelKey, &str)] = &[
    (Title, "🌽 Smart Maize"),
    (Subtitle, "Assistant Professionnel pour la Production de Maïs"),
    (LanguageSelector, "🌐 Langue"),
    (Footer, "Développé par Pascoal Barros chez Frondosa Agronomic"),
    (RainfallInput, "Pluviométrie prévue (mm)"),
    (TemperatureInput, "Température moyenne (°C)"),
    (SoilInput, "Type de sol"),
    (DaysInput, "Jours depuis la plantation"),
    (AnalyzeButton, "Analyser le scénario agricole"),
    (SoilLoam, "Limoneux"),
    (SoilClay, "Argileux"),
    (SoilSandy, "Sableux"),
    (DecisionHeading, "Décision de plantation"),
    (CropPhaseHeading, "Phase de la culture"),
    (PestsHeading, "Ravageurs"),
    (WaterHeading, "Eau / Irrigation"),
    (ProductivityHeading, "Productivité"),
    (CanPlant, "Peut planter 🌱"),
    (SoilLimiting, "Climat favorable, mais sol limitant ⚠️"),
    (DoNotPlant, "Ne pas planter ❌"),
    (PhaseEmergence, "Emergence 🌱"),
    (PhaseVegetativeGrowth, "Croissance végétative 🌿"),
    (PhaseFlowering, "Floraison 🌼"),
    (PhaseFillingAndMaturity, "Remplissage et maturation 🌽"),
    (PestRisk, "Risque élevé de pyrale du maïs 🐛"),
    (PestOk, "Pas de risque significatif de parasites ✅"),
    (WaterHigh, "Besoins élevés en eau 💧"),
    (WaterOk, "Disponibilité en eau adéquate 💦"),
    (ProductivityHigh, "Productivité élevée 🚀"),
    (ProductivityMedium, "Productivité moyenne ⚡"),
    (ProductivityLow, "Productivité faible 🛑"),
    (SeverityGood, "Favorable"),
    (SeverityWarning, "Attention"),
    (SeverityBad, "Défavorable"),
];
