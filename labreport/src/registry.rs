//! The authored report content: an ordered, immutable list of panels.
//!
//! This is data, not logic. Order is display order and is preserved exactly
//! as authored; nothing mutates the registry at runtime. The descriptions
//! carry the report's original inline markup verbatim — the formatter
//! rewrites only the two emphasis tag pairs and trusts the rest.

/// The closed set of panel icons, resolved to glyphs by the page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Candy,
    Wheat,
    Droplets,
    TestTube,
    Leaf,
    AlertTriangle,
    CheckCircle,
    ListChecks,
}

/// One expandable panel: header fields plus the raw description markup.
/// `image` and `image_alt` are present together or not at all.
#[derive(Debug, Clone, Copy)]
pub struct ContentRecord {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: Icon,
    pub image: Option<&'static str>,
    pub image_alt: Option<&'static str>,
    pub description: &'static str,
}

/// The panels in authored order.
pub fn records() -> &'static [ContentRecord] {
    &RECORDS
}

/// Look up a record by key.
pub fn record(key: &str) -> Option<&'static ContentRecord> {
    RECORDS.iter().find(|r| r.key == key)
}

static RECORDS: [ContentRecord; 8] = [
    ContentRecord {
        key: "reducing-sugars",
        title: "Reducing Sugars (Benedict’s Test)",
        icon: Icon::Candy,
        image: None,
        image_alt: None,
        description: r#"
      <b>Description:</b> Benedict’s solution detects <i>reducing sugars</i> such as glucose and fructose. When heated with these sugars, the copper(II) ions in Benedict’s reagent are reduced to copper(I) oxide, forming a colour change from blue → green → yellow → orange → brick-red depending on the sugar concentration.<br><br>
      <b>Method:</b>
      <ul>
        <li>2 mL of Sprite was placed in a clean test tube.</li>
        <li>2 mL of Benedict’s solution was added.</li>
        <li>The mixture was heated in a water bath at ~80°C for approximately 10 minutes.</li>
      </ul>
      <b>Results:</b><br>
      - <b>Trial 1:</b> Solution turned dark red after heating.<br>
      - <b>Trial 2:</b> Solution also turned brick-red<br><br>
      <b>Interpretation:</b> The colour change from blue to dark red indicates a <b>high concentration of reducing sugars</b>, approximately 60% sugar by composition.<br><br>
      <b>Conclusion:</b> The Sprite sample contains a <b>very high amount of reducing sugars</b> (mainly glucose and fructose), which is makes sense with the nutrition facts of the soft drink.<br><br>
      <div class="flex flex-col md:flex-row gap-3">
        <img src="/biochem-photos/benedict-1.jpeg" alt="Benedict’s test trial 1 showing brick-red precipitate indicating high reducing sugar concentration" class="rounded-lg shadow-md w-full md:w-1/2">
        <img src="/biochem-photos/benedict-2.jpeg" alt="Benedict’s test trial 2 showing similar brick-red precipitate confirming high reducing sugar levels" class="rounded-lg shadow-md w-full md:w-1/2">
      </div>
    "#,
    },
    ContentRecord {
        key: "starch-test",
        title: "Starch (Iodine Test)",
        icon: Icon::Wheat,
        image: None,
        image_alt: None,
        description: r#"
      <b>Description:</b> Iodine solution reacts with starch to form a <b>blue-black complex</b>. If starch is absent, the iodine remains <b>yellow or orange-brown</b>.<br><br>
      <b>Method:</b>
      <ul>
        <li>2 mL of Sprite was placed in a clean test tube.</li>
        <li>3 drops of iodine solution were added and gently mixed.</li>
      </ul>
      <b>Results:</b><br>
      - <b>Trial 1:</b> Solution remained dark yellow (no blue-black colour formed).<br>
      - <b>Trial 2:</b> Solution again stayed clear yellow.<br><br>
      <b>Interpretation:</b> No blue-black colour indicates <b>absence of starch</b> in Sprite.<br><br>
      <b>Conclusion:</b> Sprite does not contain any starch which is consistent with its composition as a simple sugar-based drink without complex carbohydrates.<br><br>
      <div class="flex flex-col md:flex-row gap-3">
        <img src="/biochem-photos/lygol-1.jpeg" alt="Iodine test trial 1 showing yellow colour indicating absence of starch" class="rounded-lg shadow-md w-full md:w-1/2">
        <img src="/biochem-photos/lygol-2.jpeg" alt="Iodine test trial 2 showing similar yellow result confirming no starch present" class="rounded-lg shadow-md w-full md:w-1/2">
      </div>
    "#,
    },
    ContentRecord {
        key: "fat-test",
        title: "Fat (Emulsion Test)",
        icon: Icon::Droplets,
        image: None,
        image_alt: None,
        description: r#"
      <b>Description:</b> Fats and oils are soluble in ethanol but not in water. When an ethanol extract of the food sample is added to water, a <b>milky or cloudy emulsion</b> forms if lipids are present.<br><br>
      <b>Method:</b>
      <ul>
        <li>2 mL of Sprite was mixed with 2 mL of ethanol in a test tube.</li>
        <li>After shaking, distilled water was added.</li>
      </ul>
      <b>Results:</b><br>
      - <b>Trial 1:</b> Mixture remained completely clear.<br>
      - <b>Trial 2:</b> Again, the solution stayed transparent with no cloudy layer.<br><br>
      <b>Interpretation:</b> The absence of a milky emulsion indicates <b>no lipids present</b>.<br><br>
      <b>Conclusion:</b> Sprite does not contain fats or oils, consistent with its nutritional label (0g fat). Bonus: have a look at the 3D model for nutrition label facts.<br><br>
      <div class="flex flex-col md:flex-row gap-3">
        <img src="/biochem-photos/emulsion-1.jpeg" alt="Ethanol emulsion test trial 1 showing clear solution indicating no fat" class="rounded-lg shadow-md w-full md:w-1/2">
        <img src="/biochem-photos/emulsion-2.jpeg" alt="Ethanol emulsion test trial 2 showing clear solution confirming absence of fats" class="rounded-lg shadow-md w-full md:w-1/2">
      </div>
    "#,
    },
    ContentRecord {
        key: "protein-test",
        title: "Protein (Biuret Test)",
        icon: Icon::TestTube,
        image: None,
        image_alt: None,
        description: r#"
      <b>Description:</b> The Biuret test detects the presence of <b>peptide bonds</b> in proteins. When Biuret reagent (a mixture of copper sulfate and sodium hydroxide) reacts with proteins, it turns from <b>blue to purple</b>.<br><br>
      <b>Method:</b>
      <ul>
        <li>2 mL of Sprite was placed in a test tube.</li>
        <li>2 mL of Biuret reagent was added and mixed.</li>
      </ul>
      <b>Results:</b><br>
      - <b>Trial 1:</b> Solution remained light blue.<br>
      - <b>Trial 2:</b> Solution became dark blue.<br><br>
      <b>Interpretation:</b> The absence of a purple/violet colour indicates <b>no proteins or amino acids</b> present in Sprite.<br><br>
      <b>Conclusion:</b> Sprite contains <b>no protein</b>, as expected for a carbonated sugar solution.<br><br>
      <div class="flex flex-col md:flex-row gap-3">
        <img src="/biochem-photos/protein-1.jpeg" alt="Biuret test trial 1 showing blue solution indicating negative protein test" class="rounded-lg shadow-md w-full md:w-1/2">
        <img src="/biochem-photos/protein-2.jpeg" alt="Biuret test trial 2 showing similar blue result confirming no protein present" class="rounded-lg shadow-md w-full md:w-1/2">
      </div>
    "#,
    },
    ContentRecord {
        key: "sprite-ingredients-full",
        title: "Ingredients in a Classic Sprite",
        icon: Icon::Leaf,
        image: Some("/biochem-photos/chemical.png"),
        image_alt: Some("A phenylalanine molecule"),
        description: r#"
        <h2 class="fw-bold">Key Ingredients:</h2>
        <ul>
            <li><b>Carbonated Water:</b> Water infused with carbon dioxide for fizziness and a refreshing taste.</li>
            <li><b>Sugar (Sucrose/Glucose-Fructose Syrup):</b> Sweetens the drink and serves as the main energy source.</li>
            <li><b>Citric Acid (330):</b> Provides tartness, enhances the lemon-lime flavour, and acts as a preservative.</li>
            <li><b>Natural Flavours:</b> Extracts from lemon and lime that create Sprite's characteristic citrus taste.</li>
            <li><b>Sodium Citrate (331):</b> Functions as a buffering agent to control acidity and stabilize the flavour.</li>
            <li><b>Potassium Sorbate (202):</b> A common **preservative** that inhibits the growth of mould and yeast.</li>
            <li><b>Sodium Benzoate (211):</b> Another widely used **preservative** that controls bacteria, typically used in acidic drinks.</li>
            <li><b>Phenylalanine:</b> This amino acid is a required disclosure warning when the artificial sweetener Aspartame is used in *Diet/Zero* versions.</li>
        </ul>

        <hr>

        <p class="fw-bold">Nutritional Evaluation:</p>
        <p>Sprite is a source of empty calories (mainly sugar) with no essential nutrients. The high sugar content and sweeteners suggest that the drink is not a healthy choice.</p>
    "#,
    },
    ContentRecord {
        key: "errors",
        title: "Potential Sources of Error",
        icon: Icon::AlertTriangle,
        image: None,
        image_alt: None,
        description: r#"
      <b>Random Errors:</b>
      <ul>
        <li>Measurement inaccuracies due to lack of precise measuring equipment. Liquids were poured by estimation rather than using pipettes or measuring cylinders.</li>
        <li>The water bath temperature may not have been consistent due to the heating device (it was a bit weird to use) which could affect the reaction rates.</li>
      </ul>
      <b>Personal Errors:</b>
      <ul>
        <li>Inconsistent timing between trials: test tubes were left for “about 10 minutes” rather than an exact duration.</li>
      </ul>
      <b>Systematic Errors:</b>
      <ul>
        <li>The heating device used for the water bath may not have been the exact temperature we set it at (we did not test the temperature with a thermometer) which could cause uneven heating.</li>
      </ul>
    "#,
    },
    ContentRecord {
        key: "conclusion",
        title: "Overall Conclusion",
        icon: Icon::CheckCircle,
        image: None,
        image_alt: None,
        description: r#"
        The tests on the Sprite showed these results:
        <ul>
            <li><b>Reducing sugars:</b> High amount.</li>
            <li><b>Starch:</b> None found.</li>
            <li><b>Fats:</b> Also none found.</li>
            <li><b>Proteins:</b> Not detected.</li>
        </ul>

        <p class="fw-bold">What the results suggest:</p>
        <p>The results make sense when you look at what Sprite is. It's mostly just sugar and water. The tests confirmed that Sprite is a high-sugar drink with no fats or protein. This shows that the energy you get from Sprite is only from simple carbs (the sugars), and it doesn't have any of the important building blocks like protein or fats.</p>

        <p class="fw-bold">Final Summary:</p>
        <p>This experiment proved that Sprite is mainly a source of quick energy because of the sugar it contains. It doesn't have other important nutrients. The whole experiment worked well with two trials and confirmed the facts we already knew from the nutrition label.</p>
    "#,
    },
    ContentRecord {
        key: "references",
        title: "References",
        icon: Icon::ListChecks,
        image: None,
        image_alt: None,
        description: r#"
      <ul>
        <li>https://www.coca-cola.com/us/en/brands/sprite/products#accordion-ecc962e3be-item-3d52d39708</li>
        <li>https://microbenotes.com/biuret-test-for-protein/</li>
        <li>https://smartlabel.coca-colaproductfacts.com/nutrition/index.html?upc=049000028928</li>
        <li>https://www.healthline.com/nutrition/phenylalanine</li>
      </ul>
    "#,
    },
];
