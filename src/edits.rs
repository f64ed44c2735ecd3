use crate::patch::PatchPair;

/// Relative path into the web app's source tree. The patcher is run from the
/// repository root, like the smoke scripts it edits.
pub const TARGET_PATH: &str = "src/scripts/smoke/head-xray.mjs";

// head-xray.mjs is CRLF-delimited, so every block below spells out \r\n.
// The match is byte-for-byte; re-indenting anything here breaks the lookup.

const OLD_CONST: &str = concat!(
    "const TYPES = [\"benchmark\", \"delta\", \"pct24h\", \"id_pct\", \"pct_drv\"];\r\n",
    "const SLEEP = ms => new Promise(r => setTimeout(r, ms));",
);

const NEW_CONST: &str = concat!(
    "const TYPES = [\"benchmark\", \"delta\", \"pct24h\", \"id_pct\", \"pct_drv\"];\r\n",
    "const DEF_COINS = [\"BTC\",\"ETH\",\"BNB\",\"SOL\",\"ADA\",\"XRP\",\"PEPE\",\"USDT\"];\r\n",
    "const SLEEP = ms => new Promise(r => setTimeout(r, ms));",
);

const OLD_FUNC: &str = concat!(
    "async function getSettingsCoins() {\r\n",
    "  const { status, body } = await jget(\"/api/settings\");\r\n",
    "  if (status !== 200 || !body) return normCoins([\"BTC\",\"ETH\",\"BNB\",\"SOL\",\"ADA\",\"XRP\",\"PEPE\",\"USDT\"]);\r\n",
    "  const from =\r\n",
    "    (Array.isArray(body?.coinUniverse) && body.coinUniverse) ||\r\n",
    "    (Array.isArray(body?.coins) && body.coins) ||\r\n",
    "    [];\r\n",
    "  const coins = normCoins(from);\r\n",
    "  return coins.length ? coins : normCoins([\"BTC\",\"ETH\",\"BNB\",\"SOL\",\"ADA\",\"XRP\",\"PEPE\",\"USDT\"]);\r\n",
    "}\r\n",
    "\r\n",
    "function qsCoins(coins) {",
);

// Replacement resolver: COINS env var, then the head matrix endpoint, then
// settings, then DEF_COINS. Returns the list plus a tag naming the source.
const NEW_FUNC: &str = concat!(
    "async function resolveCoins() {\r\n",
    "  if (process.env.COINS) {\r\n",
    "    const fromEnv = normCoins(process.env.COINS.split(\",\"));\r\n",
    "    if (fromEnv.length) return { coins: fromEnv, source: \"env:COINS\" };\r\n",
    "  }\r\n",
    "\r\n",
    "  const head = await jget(\"/api/matrices/head\");\r\n",
    "  if (head.status === 200 && Array.isArray(head.body?.coins)) {\r\n",
    "    const fromHead = normCoins(head.body.coins);\r\n",
    "    if (fromHead.length) return { coins: fromHead, source: \"/api/matrices/head\" };\r\n",
    "  }\r\n",
    "\r\n",
    "  const settings = await jget(\"/api/settings\");\r\n",
    "  if (settings.status === 200 && settings.body) {\r\n",
    "    const list =\r\n",
    "      (Array.isArray(settings.body?.coinUniverse) && settings.body.coinUniverse) ||\r\n",
    "      (Array.isArray(settings.body?.coins) && settings.body.coins) ||\r\n",
    "      [];\r\n",
    "    const fromSettings = normCoins(list);\r\n",
    "    if (fromSettings.length) return { coins: fromSettings, source: \"/api/settings\" };\r\n",
    "  }\r\n",
    "\r\n",
    "  return { coins: normCoins(DEF_COINS), source: \"default\" };\r\n",
    "}\r\n",
    "\r\n",
    "function qsCoins(coins) {",
);

const OLD_MAIN: &str = concat!(
    "  console.log(\"\\u{1F52A} head-xray: settings \u{1a} preview \u{1a} pipeline \u{1a} head/latest \u{1a} DB \\u{1F52A}\");\r\n",
    "  const coins = await getSettingsCoins();\r\n",
    "  console.log(\"[coins]\", coins.join(\", \"));",
);

const NEW_MAIN: &str = concat!(
    "  console.log(\"\\u{1F52A} head-xray: settings \u{1a} preview \u{1a} pipeline \u{1a} head/latest \u{1a} DB \\u{1F52A}\");\r\n",
    "  const { coins, source: coinSource } = await resolveCoins();\r\n",
    "  console.log(\"[coins]\", coins.join(\", \"), `(source: ${coinSource})`);",
);

/// The three substitutions, in application order. The blocks target disjoint
/// regions of the file, so the ordering is for readability.
pub fn patch_pairs() -> [PatchPair; 3] {
    [
        PatchPair {
            label: "constants block",
            expected: OLD_CONST,
            replacement: NEW_CONST,
        },
        PatchPair {
            label: "getSettingsCoins block",
            expected: OLD_FUNC,
            replacement: NEW_FUNC,
        },
        PatchPair {
            label: "main coins logging block",
            expected: OLD_MAIN,
            replacement: NEW_MAIN,
        },
    ]
}
