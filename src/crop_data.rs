//! Traducciones de cultivos y de estados de salud a los 11 idiomas.
//!
//! Cada fila sigue el orden de `Language::ALL`.

use crate::languages::Language;

type Row = (&'static str, [&'static str; 11]);

pub(crate) const CROPS: &[Row] = &[
    ("RICE", [
        "Rice (Paddy)", "धान (चावल)", "நெல் (அரிசி)", "వరి", "ಭತ್ತ (ಅಕ್ಕಿ)", "ধান",
        "भात", "ડાંગર", "നെല്ല്", "ਝੋਨਾ", "ଧାନ",
    ]),
    ("WHEAT", [
        "Wheat", "गेहूं", "கோதுமை", "గోధుమ", "ಗೋಧಿ", "গম",
        "गहू", "ઘઉં", "ഗോതമ്പ്", "ਕਣਕ", "ଗହମ",
    ]),
    ("COTTON", [
        "Cotton", "कपास", "பருத்தி", "పత్తి", "ಹತ್ತಿ", "তুলা",
        "कापूस", "કપાસ", "പരുത്തി", "ਕਪਾਹ", "କପା",
    ]),
    ("TOMATO", [
        "Tomato", "टमाटर", "தக்காளி", "టమాటా", "ಟೊಮೆಟೊ", "টমেটো",
        "टोमॅटो", "ટામેટા", "തക്കാളി", "ਟਮਾਟਰ", "ଟମାଟୋ",
    ]),
    ("MAIZE", [
        "Maize (Corn)", "मक्का", "சோளம்", "మొక్కజొన్న", "ಮೆಕ್ಕೆ ಜೋಳ", "ভুট্টা",
        "मका", "મકાઈ", "ചോളം", "ਮੱਕੀ", "ମକା",
    ]),
    ("CHILLI", [
        "Chilli", "मिर्च", "மிளகாய்", "మిరప", "ಮೆಣಸಿನಕಾಯಿ", "লঙ্কা",
        "मिरची", "મરચું", "മുളക്", "ਮਿਰਚ", "ଲଙ୍କା",
    ]),
    ("UNKNOWN", [
        "Unknown Plant", "अज्ञात पौधा", "தெரியாத தாவரம்", "తెలియని మొక్క", "ಅಪರಿಚಿತ ಸಸ್ಯ", "অজানা উদ্ভিদ",
        "अज्ञात वनस्पती", "અજાણ્યો છોડ", "അജ്ഞാത സസ്യം", "ਅਣਜਾਣ ਪੌਦਾ", "ଅଜ୍ଞାତ ଉଦ୍ଭିଦ",
    ]),
];

pub(crate) const STATUSES: &[Row] = &[
    ("HEALTHY", [
        "Healthy", "स्वस्थ", "ஆரோக்கியமான", "ఆరోగ్యకరమైన", "ಆರೋಗ್ಯಕರ", "সুস্থ",
        "निरोगी", "તંદુરસ્ત", "ആരോഗ്യമുള്ള", "ਸਿਹਤਮੰਦ", "ସୁସ୍ଥ",
    ]),
    ("DISEASED", [
        "Disease Detected", "रोग का पता चला", "நோய் கண்டறியப்பட்டது", "వ్యాధి గుర్తించబడింది", "ರೋಗ ಪತ್ತೆಯಾಗಿದೆ", "রোগ সনাক্ত হয়েছে",
        "रोग आढळला", "રોગ જણાયો", "രോഗം കണ്ടെത്തി", "ਬਿਮਾਰੀ ਦਾ ਪਤਾ ਲੱਗਾ", "ରୋଗ ଚିହ୍ନଟ ହେଲା",
    ]),
    ("PEST", [
        "Pest Infestation", "कीट का प्रकोप", "பூச்சி தாக்குதல்", "చీడపీడలు", "ಕೀಟ ಬಾಧೆ", "পোকামাকড়ের উপদ্রব",
        "कीड लागण", "જીવાત ઉપદ્રવ", "കീടബാധ", "ਕੀੜੇ ਦਾ ਹਮਲਾ", "ପୋକ ଆକ୍ରମଣ",
    ]),
    ("NUTRIENT_DEFICIENCY", [
        "Nutrient Deficiency", "पोषक तत्वों की कमी", "ஊட்டச்சத்து குறைபாடு", "పోషకాల లోపం", "ಪೋಷಕಾಂಶಗಳ ಕೊರತೆ", "পুষ্টির অভাব",
        "पोषक तत्वांची कमतरता", "પોષક તત્વોની ઉણપ", "പോഷകക്കുറവ്", "ਪੋਸ਼ਕ ਤੱਤਾਂ ਦੀ ਕਮੀ", "ପୋଷକ ତତ୍ତ୍ୱ ଅଭାବ",
    ]),
    ("UNCERTAIN", [
        "Uncertain", "अनिश्चित", "நிச்சயமற்ற", "అనిశ్చిత", "ಅನಿಶ್ಚಿತ", "অনিশ্চিত",
        "अनिश्चित", "અનિશ્ચિત", "അനിശ്ചിത", "ਅਨਿਸ਼ਚਿਤ", "ଅନିଶ୍ଚିତ",
    ]),
];

/// Busca `tag` en la tabla y devuelve su texto en `language`.
pub(crate) fn lookup(table: &[Row], tag: &str, language: Language) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == tag)
        .map(|(_, row)| row[language as usize])
}
