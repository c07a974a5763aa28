//! Prompts for the enrichment model.
//!
//! The generated copy is Turkish, like the rule-based templates.

use crate::traits::enricher::EnrichmentRequest;

/// System prompt: editor persona and the JSON-only output contract.
pub const SYSTEM_PROMPT: &str = r#"Sen deneyimli bir SEO editörüsün. Türkçe, akıcı, devriksiz yaz.
Özel isimleri (brand, label) asla çevirme; tamamen büyük harf kullanma.
ÇIKTIYI SADECE JSON döndür: {"title":"...","description":"...","keywords":["...","..."]}"#;

/// User prompt template. Placeholders are `{brand}`, `{label}`,
/// `{main_category}`, `{category}`, `{sub_category}` and `{details}`.
pub const USER_PROMPT: &str = r#"Veriler (yalnız satırdan beslen):
- brand: {brand}
- label: {label}
- main/category/sub: {main_category} / {category} / {sub_category}
- details (HTML temiz): {details}

Kurallar:
- Title: 50–60 karakter hedef; ürün tipini açık et (örn. akıllı telefon / koşu ayakkabısı / şampuan).
  Şablon esnek: [Marka] [Label] [ürün tipi veya anlamlı nitelik].
  Kelime ortasında kesme yok, üç nokta yok.
- Description: 140–160 karakter, tek cümle (en fazla iki kısa cümle). Doğal ve tarafsız.
- Keywords: 2–3 anlamlı anahtar (örn. 'Apple iPhone 14 Pro Max', 'akıllı telefon', '128 gb').
- Alan dışı varsayım yapma; ürün tipini kategori adlarından türet."#;

/// Fill the user prompt for one row.
pub fn format_user_prompt(request: &EnrichmentRequest) -> String {
    USER_PROMPT
        .replace("{brand}", &request.brand)
        .replace("{label}", &request.label)
        .replace("{main_category}", &request.main_category)
        .replace("{category}", &request.category)
        .replace("{sub_category}", &request.sub_category)
        .replace("{details}", &request.details)
}
