//! Minimal browser form for the mint endpoint.

pub const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>NFT Creator on Base</title>
</head>
<body>
  <h1>NFT Creator on Base</h1>
  <form action="/api/mint" method="post" enctype="multipart/form-data">
    <fieldset>
      <legend>Configuration</legend>
      <label>Contract Address <input name="contract_address" required></label><br>
      <label>Private Key <input name="private_key" type="password" required></label><br>
      <label>Pinata API Key <input name="pinata_api_key" type="password" required></label><br>
      <label>Pinata Secret Key <input name="pinata_secret_key" type="password" required></label><br>
      <label>Network
        <select name="network">
          <option>Base Mainnet</option>
          <option>Base Sepolia (Testnet)</option>
        </select>
      </label>
    </fieldset>
    <fieldset>
      <legend>NFT</legend>
      <label>Image <input name="image" type="file" accept=".png,.jpg,.jpeg,.gif,.webp" required></label><br>
      <label>Name <input name="name" placeholder="My Amazing NFT" required></label><br>
      <label>Description <textarea name="description" required></textarea></label><br>
      <label>Recipient Address <input name="recipient" placeholder="0x... (empty for your address)"></label>
    </fieldset>
    <fieldset>
      <legend>Attributes (optional)</legend>
      <input name="trait_type" placeholder="Rarity"> <input name="trait_value" placeholder="Legendary"><br>
      <input name="trait_type"> <input name="trait_value"><br>
      <input name="trait_type"> <input name="trait_value">
    </fieldset>
    <button type="submit">Create NFT</button>
  </form>
</body>
</html>
"#;
